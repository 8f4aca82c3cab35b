use soroban_sdk::{contracttype, Address, Env};

use crate::errors::RelayError;
use crate::events;
use crate::storage::{bump_instance_ttl, bump_persistent_ttl};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lifecycle {
    Uninitialized,
    Initialized,
    /// Bare instance; `initialize` is refused forever.
    Sealed,
}

#[contracttype]
#[derive(Clone)]
pub enum AccessKey {
    Lifecycle,
    Owner,
    Admin(Address),
    Paused,
}

pub fn record_construction(env: &Env, sealed: bool) {
    let state = if sealed {
        Lifecycle::Sealed
    } else {
        Lifecycle::Uninitialized
    };
    env.storage().instance().set(&AccessKey::Lifecycle, &state);
    bump_instance_ttl(env);
}

pub fn lifecycle(env: &Env) -> Lifecycle {
    env.storage()
        .instance()
        .get(&AccessKey::Lifecycle)
        .unwrap_or(Lifecycle::Uninitialized)
}

/// The one `Uninitialized -> Initialized` transition. The new owner must authorize.
pub fn initialize_owner(env: &Env, owner: &Address) -> Result<(), RelayError> {
    if lifecycle(env) != Lifecycle::Uninitialized {
        return Err(RelayError::AlreadyInitialized);
    }
    owner.require_auth();
    let instance = env.storage().instance();
    instance.set(&AccessKey::Lifecycle, &Lifecycle::Initialized);
    instance.set(&AccessKey::Owner, owner);
    instance.set(&AccessKey::Paused, &false);
    bump_instance_ttl(env);
    events::initialized(env, owner);
    Ok(())
}

pub fn owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&AccessKey::Owner)
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), RelayError> {
    bump_instance_ttl(env);
    let owner = owner(env).ok_or(RelayError::NotInitialized)?;
    if owner != *caller {
        return Err(RelayError::NotOwner);
    }
    caller.require_auth();
    Ok(())
}

/// Returns the previous owner.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<Address, RelayError> {
    require_owner(env, caller)?;
    if new_owner == caller {
        return Err(RelayError::OwnerUnchanged);
    }
    if *new_owner == env.current_contract_address() {
        return Err(RelayError::InvalidOwner);
    }
    env.storage().instance().set(&AccessKey::Owner, new_owner);
    events::ownership_transferred(env, caller, new_owner);
    Ok(caller.clone())
}

pub fn is_admin(env: &Env, account: &Address) -> bool {
    let key = AccessKey::Admin(account.clone());
    bump_persistent_ttl(env, &key);
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), RelayError> {
    bump_instance_ttl(env);
    if lifecycle(env) != Lifecycle::Initialized {
        return Err(RelayError::NotInitialized);
    }
    if !is_admin(env, caller) {
        return Err(RelayError::NotAdmin);
    }
    caller.require_auth();
    Ok(())
}

pub fn set_admin(
    env: &Env,
    caller: &Address,
    account: &Address,
    status: bool,
) -> Result<(), RelayError> {
    require_owner(env, caller)?;
    if is_admin(env, account) == status {
        return Err(RelayError::AdminStatusUnchanged);
    }
    let key = AccessKey::Admin(account.clone());
    if status {
        env.storage().persistent().set(&key, &true);
        bump_persistent_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
    events::admin_updated(env, account, status);
    Ok(())
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&AccessKey::Paused)
        .unwrap_or(false)
}

pub fn require_not_paused(env: &Env) -> Result<(), RelayError> {
    if is_paused(env) {
        return Err(RelayError::Paused);
    }
    Ok(())
}

pub fn pause(env: &Env, caller: &Address) -> Result<(), RelayError> {
    require_owner(env, caller)?;
    require_not_paused(env)?;
    env.storage().instance().set(&AccessKey::Paused, &true);
    events::paused(env, caller);
    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), RelayError> {
    require_owner(env, caller)?;
    if !is_paused(env) {
        return Err(RelayError::NotPaused);
    }
    env.storage().instance().set(&AccessKey::Paused, &false);
    events::unpaused(env, caller);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{contract, contractimpl};

    /// Routes each access operation through its own invocation so every
    /// `require_auth` runs in a fresh frame.
    #[contract]
    struct AccessHarness;

    #[contractimpl]
    impl AccessHarness {
        pub fn __constructor(env: Env, sealed: bool) {
            record_construction(&env, sealed);
        }

        pub fn init(env: Env, owner: Address) -> Result<(), RelayError> {
            initialize_owner(&env, &owner)
        }

        pub fn state(env: Env) -> Lifecycle {
            lifecycle(&env)
        }

        pub fn current_owner(env: Env) -> Option<Address> {
            owner(&env)
        }

        pub fn owner_check(env: Env, caller: Address) -> Result<(), RelayError> {
            require_owner(&env, &caller)
        }

        pub fn admin_check(env: Env, caller: Address) -> Result<(), RelayError> {
            require_admin(&env, &caller)
        }

        pub fn grant(
            env: Env,
            caller: Address,
            account: Address,
            status: bool,
        ) -> Result<(), RelayError> {
            set_admin(&env, &caller, &account, status)
        }

        pub fn admin(env: Env, account: Address) -> bool {
            is_admin(&env, &account)
        }

        pub fn hand_over(
            env: Env,
            caller: Address,
            new_owner: Address,
        ) -> Result<Address, RelayError> {
            transfer_ownership(&env, &caller, &new_owner)
        }

        pub fn halt(env: Env, caller: Address) -> Result<(), RelayError> {
            pause(&env, &caller)
        }

        pub fn resume(env: Env, caller: Address) -> Result<(), RelayError> {
            unpause(&env, &caller)
        }

        pub fn halted(env: Env) -> bool {
            is_paused(&env)
        }

        pub fn gate(env: Env) -> Result<(), RelayError> {
            require_not_paused(&env)
        }
    }

    fn harness(env: &Env, sealed: bool) -> AccessHarnessClient<'_> {
        env.mock_all_auths();
        let contract_id = env.register(AccessHarness, (sealed,));
        AccessHarnessClient::new(env, &contract_id)
    }

    #[test]
    fn initialize_owner_runs_once() {
        let env = Env::default();
        let access = harness(&env, false);
        let root = Address::generate(&env);

        assert_eq!(access.state(), Lifecycle::Uninitialized);
        access.init(&root);
        assert_eq!(access.state(), Lifecycle::Initialized);
        assert_eq!(access.current_owner(), Some(root.clone()));
        assert_eq!(
            access.try_init(&root),
            Err(Ok(RelayError::AlreadyInitialized))
        );
    }

    #[test]
    fn sealed_instance_never_initializes() {
        let env = Env::default();
        let access = harness(&env, true);
        let root = Address::generate(&env);

        assert_eq!(access.state(), Lifecycle::Sealed);
        assert_eq!(
            access.try_init(&root),
            Err(Ok(RelayError::AlreadyInitialized))
        );
        assert_eq!(access.current_owner(), None);
        assert_eq!(
            access.try_admin_check(&root),
            Err(Ok(RelayError::NotInitialized))
        );
    }

    #[test]
    fn admin_writes_must_change_status() {
        let env = Env::default();
        let access = harness(&env, false);
        let root = Address::generate(&env);
        let account = Address::generate(&env);
        access.init(&root);

        assert_eq!(
            access.try_grant(&root, &account, &false),
            Err(Ok(RelayError::AdminStatusUnchanged))
        );
        access.grant(&root, &account, &true);
        assert!(access.admin(&account));
        assert_eq!(
            access.try_grant(&root, &account, &true),
            Err(Ok(RelayError::AdminStatusUnchanged))
        );
        access.grant(&root, &account, &false);
        assert!(!access.admin(&account));
    }

    #[test]
    fn roles_are_disjoint() {
        let env = Env::default();
        let access = harness(&env, false);
        let root = Address::generate(&env);
        let admin = Address::generate(&env);
        access.init(&root);
        access.grant(&root, &admin, &true);

        assert_eq!(
            access.try_admin_check(&root),
            Err(Ok(RelayError::NotAdmin))
        );
        assert_eq!(
            access.try_owner_check(&admin),
            Err(Ok(RelayError::NotOwner))
        );
        access.admin_check(&admin);
        access.owner_check(&root);
    }

    #[test]
    fn ownership_transfer_rejects_no_op_and_self() {
        let env = Env::default();
        let access = harness(&env, false);
        let root = Address::generate(&env);
        let next = Address::generate(&env);
        access.init(&root);

        assert_eq!(
            access.try_hand_over(&root, &root),
            Err(Ok(RelayError::OwnerUnchanged))
        );
        assert_eq!(
            access.try_hand_over(&root, &access.address),
            Err(Ok(RelayError::InvalidOwner))
        );
        assert_eq!(access.hand_over(&root, &next), root.clone());
        assert_eq!(
            access.try_owner_check(&root),
            Err(Ok(RelayError::NotOwner))
        );
        access.owner_check(&next);
    }

    #[test]
    fn pause_toggles_strictly() {
        let env = Env::default();
        let access = harness(&env, false);
        let root = Address::generate(&env);
        access.init(&root);

        assert_eq!(access.try_resume(&root), Err(Ok(RelayError::NotPaused)));
        access.halt(&root);
        assert!(access.halted());
        assert_eq!(access.try_gate(), Err(Ok(RelayError::Paused)));
        assert_eq!(access.try_halt(&root), Err(Ok(RelayError::Paused)));
        access.resume(&root);
        assert!(!access.halted());
        access.gate();
    }
}
