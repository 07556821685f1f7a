use soroban_sdk::{contracterror, symbol_short, Env, Symbol};

const LEDGER_LOCK: Symbol = symbol_short!("LDG_LOCK");

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ReentrancyError {
    ReentrantCall = 99,
}

/// Holds the contract-wide lock for entry points that move funds out of the
/// contract. The lock lives in instance storage and is released on drop.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    /// Takes the lock.
    ///
    /// # Panics
    ///
    /// Panics with `ReentrancyError::ReentrantCall` when a fund-moving call is
    /// already in progress on this contract.
    pub fn enter(env: &'a Env) -> Self {
        if is_locked(env) {
            env.panic_with_error(ReentrancyError::ReentrantCall);
        }
        env.storage().instance().set(&LEDGER_LOCK, &true);
        Self { env }
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&LEDGER_LOCK);
    }
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<_, bool>(&LEDGER_LOCK)
        .unwrap_or(false)
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::contract;

    #[contract]
    pub struct Scratch;

    #[test]
    fn test_lock_released_on_drop() {
        let env = Env::default();
        let id = env.register(Scratch, ());

        env.as_contract(&id, || {
            {
                let _guard = ReentrancyGuard::enter(&env);
                assert!(is_locked(&env));
            }
            assert!(!is_locked(&env));
        });
    }

    #[test]
    #[should_panic]
    fn test_nested_enter_panics() {
        let env = Env::default();
        let id = env.register(Scratch, ());

        env.as_contract(&id, || {
            let _outer = ReentrancyGuard::enter(&env);
            let _inner = ReentrancyGuard::enter(&env);
        });
    }
}
