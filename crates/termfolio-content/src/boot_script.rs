use termfolio_core::boot::BootScript;
use termfolio_core::boot::GlitchStage;

const GLITCH: [(&str, u64); 9] = [
    ("R4fa3l M1r4nda F3rr31ra", 900),
    ("Rafael Mir#nda Ferr&!ra", 700),
    ("R@f@el M!r@nd@ Ferreir@", 600),
    ("Raf@el Mir@nd@ Ferreir@", 500),
    ("R@f@el Mir@nd@", 400),
    ("RM Ferreira", 600),
    ("RM F", 800),
    ("RM -RF", 1100),
    ("rm -rf /", 1600),
];

const MESSAGES: [&str; 12] = [
    "Initializing system...",
    "CPU: Intel Core i9-12900K @ 5.2GHz",
    "RAM: 64GB DDR5-5600",
    "Loading kernel modules...",
    "Checking disk integrity...",
    "ERROR: System corruption detected.",
    "Scanning disk for errors...",
    "Multiple corrupted sectors found.",
    "Attempting automatic recovery...",
    "Recovery failed: Critical system files missing.",
    "Initiating emergency recovery mode...",
    "Loading minimal environment...",
];

/// The owner's name decaying into `rm -rf /`, then a failing boot log.
pub fn default_boot_script() -> BootScript {
    BootScript {
        stages: GLITCH
            .iter()
            .map(|(text, hold_ms)| GlitchStage {
                text: text.to_string(),
                hold_ms: *hold_ms,
            })
            .collect(),
        messages: MESSAGES.iter().map(|message| message.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use termfolio_core::boot::Reveal;
    use termfolio_core::config::BootConfig;

    use super::*;

    #[test]
    fn glitch_ends_on_the_joke() {
        let script = default_boot_script();
        let names: Vec<String> = script
            .reveal(&BootConfig::default())
            .filter_map(|event| match event.reveal {
                Reveal::Name(name) => Some(name),
                _ => None,
            })
            .collect();
        assert_eq!(names.len(), 9);
        assert_eq!(names.last().map(String::as_str), Some("rm -rf /"));
    }

    #[test]
    fn every_message_gets_a_line() {
        let script = default_boot_script();
        let breaks = script
            .reveal(&BootConfig::fast())
            .filter(|event| event.reveal == Reveal::LineBreak)
            .count();
        assert_eq!(breaks, 12);
    }
}
