use serde::{Deserialize, Serialize};

/// The role claim the identity provider puts on every principal. A
/// `Role` maps to a fixed `Policy` deciding which use cases the caller
/// may execute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Worker,
    Client,
}

impl Role {
    pub fn policy(&self) -> Policy {
        match self {
            Role::Admin => Policy {
                allow: Some(vec![Permission::All]),
                reject: None,
            },
            Role::Worker => Policy {
                allow: Some(vec![
                    Permission::ManageAvailability,
                    Permission::ScheduleService,
                    Permission::CreateServiceRecord,
                    Permission::UpdateServiceRecord,
                    Permission::DeleteServiceRecord,
                    Permission::CreateCustomer,
                    Permission::UpdateCustomer,
                    Permission::DeleteCustomer,
                    Permission::CreateVehicle,
                    Permission::UpdateVehicle,
                    Permission::DeleteVehicle,
                    Permission::CreateReminder,
                    Permission::UpdateReminder,
                    Permission::DeleteReminder,
                    Permission::SendReminders,
                ]),
                reject: None,
            },
            Role::Client => Policy {
                allow: Some(vec![Permission::ScheduleService]),
                reject: None,
            },
        }
    }
}

/// A Policy is derived from a `Principal`s role and decides which actions
/// it can and cannot take.
///
/// Every gated `UseCase` contains a list of `Permission`s that is
/// required to execute it, if the `Policy` is not authorized
/// some of these `Permission`s the request will be rejected.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Policy {
    /// `Permission`s allowed by the `Policy`
    allow: Option<Vec<Permission>>,
    /// `Permission`s rejected by the `Policy`
    reject: Option<Vec<Permission>>,
}

impl Policy {
    /// Checks if this `Policy` has the right to list of `Permission`s
    pub fn authorize(&self, permissions: &[Permission]) -> bool {
        if permissions.is_empty() {
            return true;
        }

        if let Some(rejected) = &self.reject {
            for rejected_permission in rejected {
                if *rejected_permission == Permission::All {
                    return false;
                }
                if permissions.contains(rejected_permission) {
                    return false;
                }
            }
        }

        if let Some(allowed) = &self.allow {
            // First loop to check if All exists
            if allowed.contains(&Permission::All) {
                return true;
            }

            // Check that all permissions are in allowed
            for permission in permissions {
                if !allowed.contains(permission) {
                    return false;
                }
            }

            return true;
        }

        false
    }
}

/// `Permission` are different kind of actions that can be performed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Permission {
    #[serde(rename = "*")]
    All,
    ManageAvailability,
    ScheduleService,
    CreateServiceRecord,
    UpdateServiceRecord,
    DeleteServiceRecord,
    CreateCustomer,
    UpdateCustomer,
    DeleteCustomer,
    CreateVehicle,
    UpdateVehicle,
    DeleteVehicle,
    CreateReminder,
    UpdateReminder,
    DeleteReminder,
    SendReminders,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn permissions() {
        let policy = Policy::default();
        assert!(policy.authorize(&Vec::new()));
        assert!(!policy.authorize(&[Permission::CreateCustomer]));

        let policy = Policy {
            allow: Some(vec![Permission::All]),
            reject: None,
        };
        assert!(policy.authorize(&[Permission::CreateCustomer]));

        let policy = Policy {
            allow: Some(vec![Permission::All]),
            reject: Some(vec![Permission::CreateCustomer]),
        };
        assert!(!policy.authorize(&[Permission::CreateCustomer]));

        let policy = Policy {
            allow: Some(vec![Permission::CreateCustomer]),
            reject: Some(Vec::new()),
        };
        assert!(policy.authorize(&[Permission::CreateCustomer]));

        let policy = Policy {
            allow: Some(vec![Permission::CreateCustomer]),
            reject: Some(vec![Permission::CreateCustomer]),
        };
        assert!(!policy.authorize(&[Permission::CreateCustomer]));

        let policy = Policy {
            allow: Some(vec![Permission::CreateCustomer]),
            reject: Some(vec![Permission::All]),
        };
        assert!(!policy.authorize(&[Permission::CreateCustomer]));

        let policy = Policy {
            allow: Some(vec![Permission::CreateCustomer, Permission::UpdateCustomer]),
            reject: Some(vec![Permission::DeleteCustomer]),
        };
        assert!(policy.authorize(&[Permission::CreateCustomer]));
        assert!(policy.authorize(&[Permission::CreateCustomer, Permission::UpdateCustomer]));

        let policy = Policy {
            allow: Some(vec![Permission::UpdateCustomer]),
            reject: None,
        };
        assert!(!policy.authorize(&[Permission::CreateCustomer]));

        let policy = Policy {
            allow: Some(vec![Permission::CreateCustomer, Permission::UpdateCustomer]),
            reject: Some(vec![Permission::UpdateCustomer]),
        };
        assert!(policy.authorize(&[Permission::CreateCustomer]));
        assert!(!policy.authorize(&[Permission::CreateCustomer, Permission::UpdateCustomer]));

        let policy = Policy {
            allow: Some(vec![Permission::All]),
            reject: Some(vec![Permission::UpdateCustomer]),
        };
        assert!(policy.authorize(&[Permission::CreateCustomer]));
        assert!(policy.authorize(&[Permission::CreateCustomer, Permission::DeleteCustomer]));
        assert!(!policy.authorize(&[
            Permission::CreateCustomer,
            Permission::DeleteCustomer,
            Permission::UpdateCustomer,
        ]));
    }

    #[test]
    fn role_policies() {
        let admin = Role::Admin.policy();
        assert!(admin.authorize(&[Permission::ManageAvailability]));
        assert!(admin.authorize(&[Permission::DeleteCustomer, Permission::SendReminders]));

        let worker = Role::Worker.policy();
        assert!(worker.authorize(&[Permission::ManageAvailability]));
        assert!(worker.authorize(&[Permission::ScheduleService]));
        assert!(worker.authorize(&[Permission::SendReminders]));

        let client = Role::Client.policy();
        assert!(client.authorize(&[Permission::ScheduleService]));
        assert!(!client.authorize(&[Permission::ManageAvailability]));
        assert!(!client.authorize(&[Permission::CreateCustomer]));
        assert!(!client.authorize(&[Permission::SendReminders]));
    }
}
