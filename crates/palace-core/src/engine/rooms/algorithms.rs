use super::{Room, RoomDimensions, section_heading};
use crate::core::constants::PHI;
use crate::core::models::room_type::RoomType;
use crate::core::numbers::sequences::{fibonacci, golden_ratio_estimate};
use crate::core::numbers::sorting::quicksort_trace;
use crate::engine::config::ExhibitConfig;
use crate::engine::error::EngineError;
use std::fmt::Write;

const TRACE_INDENT: &str = "   ";

pub struct AlgorithmGallery {
    quicksort_input: Vec<i64>,
    fibonacci_terms: usize,
}

impl AlgorithmGallery {
    pub fn new(config: &ExhibitConfig) -> Self {
        Self {
            quicksort_input: config.quicksort_input.clone(),
            fibonacci_terms: config.fibonacci_terms,
        }
    }

    fn write_quicksort(&self, out: &mut String) -> Result<(), EngineError> {
        let trace = quicksort_trace(&self.quicksort_input);
        writeln!(out, "\n   Original array: {:?}", trace.original)?;
        for step in &trace.steps {
            writeln!(
                out,
                "{}Partition: {:?}",
                TRACE_INDENT.repeat(step.depth),
                step.snapshot
            )?;
        }
        Ok(())
    }

    fn write_fibonacci(&self, out: &mut String) -> Result<(), EngineError> {
        let seq = fibonacci(self.fibonacci_terms)?;
        writeln!(out, "\n   Fibonacci up to F({}):", self.fibonacci_terms)?;
        writeln!(out, "   {:?}", seq)?;
        if let Some(ratio) = golden_ratio_estimate(&seq) {
            writeln!(
                out,
                "\n   The golden ratio emerges: {:.6} → φ = {:.6}",
                ratio, PHI
            )?;
        }
        Ok(())
    }
}

impl Room for AlgorithmGallery {
    fn room_type(&self) -> RoomType {
        RoomType::AlgorithmGallery
    }

    fn dimensions(&self) -> RoomDimensions {
        RoomDimensions::finite(8192, 4096, 2048)
    }

    fn render_contents(&self, out: &mut String) -> Result<(), EngineError> {
        section_heading(out, "🎨 Inside the Algorithm Gallery:")?;

        writeln!(out, "\n💃 The QuickSort Dance:")?;
        self.write_quicksort(out)?;

        writeln!(out, "\n🌊 The MergeSort Cascade:")?;
        writeln!(out, "   [Watch the numbers divide and conquer]")?;

        writeln!(out, "\n🎯 Dijkstra's Search:")?;
        writeln!(out, "   [The shortest path emerges from chaos]")?;

        writeln!(out, "\n🧬 The Fibonacci Recursion:")?;
        self.write_fibonacci(out)?;

        writeln!(out, "\n✨ Every algorithm is poetry in motion.\n")?;
        Ok(())
    }
}
