//! Authentication collaborator. The admin core performs no authorization
//! beyond this boolean gate; login itself lives outside the core.

/// "Is the current user signed in" gate checked once on entering the admin
/// workflows, plus the outbound sign-out call.
pub trait AuthGate: Send + Sync {
    fn is_signed_in(&self) -> bool;
    fn sign_out(&self);
}
