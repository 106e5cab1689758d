//! Shared builders for the integration scenarios.

use pool_gateway::{AccessGate, SubmissionForm, SubmissionWorkflow};
use pool_store::{EntryStore, MemoryStores, PoolStore};
use shared_types::{Frequency, RemoteLevel, SalaryFields};
use std::sync::Arc;

pub fn stores() -> Arc<MemoryStores> {
    Arc::new(MemoryStores::new())
}

pub fn gate(stores: &Arc<MemoryStores>) -> AccessGate {
    AccessGate::new(
        Arc::clone(stores) as Arc<dyn PoolStore>,
        Arc::clone(stores) as Arc<dyn EntryStore>,
    )
}

pub fn workflow(stores: &Arc<MemoryStores>) -> SubmissionWorkflow {
    SubmissionWorkflow::new(
        Arc::clone(stores) as Arc<dyn PoolStore>,
        Arc::clone(stores) as Arc<dyn EntryStore>,
    )
}

pub fn fields(title: &str, amount: i32) -> SalaryFields {
    SalaryFields {
        amount,
        hours_per_week: 40,
        overtime: Frequency::Sometimes,
        overtime_paid: false,
        remote: RemoteLevel::Partial,
        title: title.to_string(),
        years_experience: 5,
        travel: Frequency::Rarely,
    }
}

pub fn valid_form(id: &str, title: &str, amount: &str) -> SubmissionForm {
    SubmissionForm {
        id: id.to_string(),
        amount: amount.to_string(),
        hourswk: "40".to_string(),
        yearsexperience: "5".to_string(),
        overtime: "sometimes".to_string(),
        overtimepaid: Some("paid".to_string()),
        remote: "partial".to_string(),
        title: title.to_string(),
        travel: "rarely".to_string(),
    }
}
