use serde::{Deserialize, Serialize};

use tally_core::{Entity, PatientId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl core::fmt::Display for Gender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        };
        f.write_str(label)
    }
}

/// Registered patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u32,
    gender: Gender,
}

impl Patient {
    pub fn new(id: PatientId, name: impl Into<String>, age: u32, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
}

impl Entity for Patient {
    type Id = PatientId;

    fn id(&self) -> PatientId {
        self.id
    }
}

impl core::fmt::Display for Patient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[Patient] ID: {}, Name: {}, Age: {}, Gender: {}",
            self.id, self.name, self.age, self.gender
        )
    }
}
