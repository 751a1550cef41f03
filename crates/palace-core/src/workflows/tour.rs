use crate::core::models::room_type::RoomType;
use crate::core::models::signature::{Signature, SignatureRequest};
use crate::engine::error::EngineError;
use crate::engine::palace::Palace;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourRequest {
    pub visitor_id: Option<String>,
    pub rooms: Vec<RoomType>,
    /// `None` leaves the guestbook untouched.
    pub signature: Option<SignatureRequest>,
}

impl Default for TourRequest {
    fn default() -> Self {
        Self {
            visitor_id: None,
            rooms: RoomType::DEFAULT_TOUR.to_vec(),
            signature: Some(SignatureRequest::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomVisit {
    pub room: RoomType,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourResult {
    pub visitor_id: String,
    pub visits: Vec<RoomVisit>,
    pub signature: Option<Signature>,
    /// 1-based position of the signature in the guestbook.
    pub signature_number: Option<usize>,
}

#[instrument(skip_all, name = "tour_workflow")]
pub fn run(
    palace: &mut Palace,
    request: &TourRequest,
    reporter: &ProgressReporter,
) -> Result<TourResult, EngineError> {
    let visitor_id = palace.enter(request.visitor_id.clone()).visitor_id.clone();
    info!(%visitor_id, rooms = request.rooms.len(), "Starting guided tour.");

    reporter.report(Progress::TaskStart {
        total_steps: request.rooms.len() as u64,
    });
    let mut visits = Vec::with_capacity(request.rooms.len());
    for &room in &request.rooms {
        reporter.report(Progress::PhaseStart {
            name: room.display_name(),
        });
        let text = palace.visit_room(&visitor_id, room)?;
        visits.push(RoomVisit { room, text });
        reporter.report(Progress::PhaseFinish);
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    let (signature, signature_number) = match &request.signature {
        Some(sig) => {
            let signature = palace.sign_guestbook(&visitor_id, sig.clone()).clone();
            let number = palace.guestbook().len();
            reporter.report(Progress::Message(format!(
                "Signature #{} recorded for {}",
                number, visitor_id
            )));
            (Some(signature), Some(number))
        }
        None => (None, None),
    };

    info!(%visitor_id, visited = visits.len(), "Tour complete.");
    Ok(TourResult {
        visitor_id,
        visits,
        signature,
        signature_number,
    })
}
