// Per-fund managers are not stored here: each fund reports its own manager.
#[derive(Clone)]
pub enum Role {
    Governance,
}
