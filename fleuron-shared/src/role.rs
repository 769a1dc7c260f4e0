use serde::{Deserialize, Serialize};

/// Operator identity supplied per-request by the caller. Not authenticated;
/// trusted at this layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Director,
    Receptionist,
    Designer,
    Driver,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Director,
        Role::Receptionist,
        Role::Designer,
        Role::Driver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Director => "director",
            Role::Receptionist => "receptionist",
            Role::Designer => "designer",
            Role::Driver => "driver",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "director" => Some(Role::Director),
            "receptionist" => Some(Role::Receptionist),
            "designer" => Some(Role::Designer),
            "driver" => Some(Role::Driver),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Director => "Director",
            Role::Receptionist => "Receptionist",
            Role::Designer => "Designer",
            Role::Driver => "Delivery Driver",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
