use feesplit_domain::{
    AllocationTotals, BillingMode, FeeAllocator, FeeInputs, HostPolicy, Participant, ParticipantId,
};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::{error::RosterError, model::ParticipantDraft};

/// Participant list and fee inputs owned by the caller.
///
/// Keeps insertion order, allows at most one host and drops stale final
/// amounts whenever an input of the allocation changes.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: IndexMap<ParticipantId, Participant, FxBuildHasher>,
    fees: FeeInputs,
    mode: BillingMode,
    last_id: u64,
}

impl Roster {
    pub fn new(fees: FeeInputs, mode: BillingMode) -> Self {
        Self {
            fees,
            mode,
            ..Self::default()
        }
    }

    pub fn add(&mut self, draft: ParticipantDraft) -> Result<ParticipantId, RosterError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if draft.order_amount.is_negative() {
            return Err(RosterError::NegativeAmount {
                name: name.to_string(),
                amount: draft.order_amount,
            });
        }

        let is_host = draft.is_host.unwrap_or(self.participants.is_empty());
        self.last_id += 1;
        let id = ParticipantId(self.last_id);
        self.participants.insert(
            id,
            Participant::new(id, name, draft.order_amount, false),
        );
        if is_host {
            self.replace(HostPolicy::promote(&self.to_vec(), id));
        }
        self.clear_final_amounts();

        tracing::debug!(
            participant_id = %id,
            is_host,
            participant_count = self.participants.len(),
            "Participant added"
        );
        Ok(id)
    }

    pub fn remove(&mut self, id: ParticipantId) -> Result<Participant, RosterError> {
        let removed = self
            .participants
            .shift_remove(&id)
            .ok_or(RosterError::UnknownParticipant(id))?;
        self.clear_final_amounts();
        Ok(removed)
    }

    pub fn promote_host(&mut self, id: ParticipantId) -> Result<(), RosterError> {
        if !self.participants.contains_key(&id) {
            return Err(RosterError::UnknownParticipant(id));
        }
        self.replace(HostPolicy::promote(&self.to_vec(), id));
        self.clear_final_amounts();
        Ok(())
    }

    pub fn set_fees(&mut self, fees: FeeInputs) {
        if self.fees != fees {
            self.fees = fees;
            self.clear_final_amounts();
        }
    }

    pub fn set_mode(&mut self, mode: BillingMode) {
        if self.mode != mode {
            self.mode = mode;
            self.clear_final_amounts();
        }
    }

    /// Runs the fee allocation over the current inputs.
    pub fn calculate(&mut self) {
        let allocated = FeeAllocator::allocate(&self.to_vec(), self.fees, self.mode);
        self.replace(allocated);
    }

    pub fn participants(&self) -> impl ExactSizeIterator<Item = &Participant> + '_ {
        self.participants.values()
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(&id)
    }

    pub fn host(&self) -> Option<&Participant> {
        HostPolicy::host_of(self.participants.values())
    }

    pub fn to_vec(&self) -> Vec<Participant> {
        self.participants.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn fees(&self) -> FeeInputs {
        self.fees
    }

    pub fn mode(&self) -> BillingMode {
        self.mode
    }

    pub fn is_calculated(&self) -> bool {
        !self.participants.is_empty()
            && self
                .participants
                .values()
                .all(|p| p.final_amount.is_some())
    }

    pub fn totals(&self) -> AllocationTotals {
        AllocationTotals::of(self.participants.values(), self.fees)
    }

    fn replace(&mut self, participants: Vec<Participant>) {
        self.participants = participants.into_iter().map(|p| (p.id, p)).collect();
    }

    fn clear_final_amounts(&mut self) {
        for person in self.participants.values_mut() {
            person.final_amount = None;
        }
    }
}
