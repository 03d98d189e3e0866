/// A named system instruction configuration selectable at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct Persona {
    pub key: &'static str,
    pub display_name: &'static str,
    pub system_instruction: &'static str,
}

/// The fixed set of personas available at runtime. Selecting one
/// rebinds the system instruction the model conditions on.
pub const PERSONAS: &[Persona] = &[
    Persona {
        key: "assistant",
        display_name: "Helpful Assistant",
        system_instruction: "You are a helpful AI assistant.",
    },
    Persona {
        key: "pirate",
        display_name: "Pirate",
        system_instruction: "You are a salty pirate captain. Answer every question in pirate speak.",
    },
    Persona {
        key: "socratic",
        display_name: "Socratic Tutor",
        system_instruction: "You are a Socratic tutor. Guide the user toward answers with \
                             probing questions rather than stating conclusions outright.",
    },
];

pub fn lookup(key: &str) -> Option<&'static Persona> {
    PERSONAS.iter().find(|p| p.key == key)
}
