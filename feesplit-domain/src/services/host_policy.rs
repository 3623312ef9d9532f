use crate::model::{Participant, ParticipantId};

/// Keeps the single-host invariant on participant lists.
pub struct HostPolicy;

impl HostPolicy {
    /// Returns a copy of `participants` where only `new_host` carries the host flag.
    ///
    /// An id that is not in the list clears every flag.
    pub fn promote(participants: &[Participant], new_host: ParticipantId) -> Vec<Participant> {
        if !participants.iter().any(|p| p.id == new_host) {
            tracing::warn!(
                participant_id = %new_host,
                "Host promotion target not found; clearing all host flags"
            );
        }

        participants
            .iter()
            .map(|person| Participant {
                is_host: person.id == new_host,
                ..person.clone()
            })
            .collect()
    }

    /// First participant carrying the host flag.
    pub fn host_of<'a, I>(participants: I) -> Option<&'a Participant>
    where
        I: IntoIterator<Item = &'a Participant>,
    {
        participants.into_iter().find(|p| p.is_host)
    }
}
