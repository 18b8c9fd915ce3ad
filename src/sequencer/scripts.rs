// SPDX-License-Identifier: MPL-2.0
//! Built-in intro scripts and the TOML script loader.
//!
//! Every built-in script has the same shape: an ordered slice of stages
//! ending on a reveal. Which one plays is a content choice made in the
//! settings file or with `--intro`.

use super::stage::{Delay, StageDefinition};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntroScript {
    /// Typed `console.log`, a ball strike and the logo.
    #[default]
    Champion,
    BootLog,
    PhoneHack,
    /// Ends on a confirmation the visitor has to type.
    PinBreach,
}

impl IntroScript {
    pub const ALL: [IntroScript; 4] = [
        IntroScript::Champion,
        IntroScript::BootLog,
        IntroScript::PhoneHack,
        IntroScript::PinBreach,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            IntroScript::Champion => "champion",
            IntroScript::BootLog => "boot-log",
            IntroScript::PhoneHack => "phone-hack",
            IntroScript::PinBreach => "pin-breach",
        }
    }

    #[must_use]
    pub fn stages(self) -> Arc<[StageDefinition]> {
        match self {
            IntroScript::Champion => champion(),
            IntroScript::BootLog => boot_log(),
            IntroScript::PhoneHack => phone_hack(),
            IntroScript::PinBreach => pin_breach(),
        }
        .into()
    }
}

impl fmt::Display for IntroScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScript(pub String);

impl fmt::Display for UnknownScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = IntroScript::ALL.iter().map(|s| s.name()).collect();
        write!(
            f,
            "unknown intro script '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownScript {}

impl FromStr for IntroScript {
    type Err = UnknownScript;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        IntroScript::ALL
            .into_iter()
            .find(|script| script.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownScript(wanted.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ScriptFile {
    #[serde(default)]
    stage: Vec<StageDefinition>,
}

/// Loads a custom script from a TOML file of `[[stage]]` tables.
///
/// Every failure, unreadable file included, is an [`Error::Script`] naming
/// the path.
pub fn load_script_file<P: AsRef<Path>>(path: P) -> Result<Arc<[StageDefinition]>> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .map_err(Error::from)
        .and_then(|content| parse_script(&content))
        .map_err(|err| {
            let reason = match err {
                Error::Script(msg) | Error::Io(msg) | Error::Config(msg) => msg,
            };
            Error::Script(format!("{}: {reason}", path.display()))
        })
}

/// Parses script TOML. A script without stages is rejected.
pub fn parse_script(content: &str) -> Result<Arc<[StageDefinition]>> {
    let file: ScriptFile =
        toml::from_str(content).map_err(|err| Error::Script(err.message().to_string()))?;
    if file.stage.is_empty() {
        return Err(Error::Script("script has no [[stage]] entries".to_string()));
    }
    Ok(file.stage.into())
}

fn champion() -> Vec<StageDefinition> {
    vec![
        StageDefinition::typewriter(
            "type",
            r#"console.log("Champion");"#,
            Delay::fixed_ms(80),
            Delay::fixed_ms(400),
        ),
        StageDefinition::hold("ball", Delay::fixed_ms(600)),
        StageDefinition::hold("impact", Delay::fixed_ms(400)),
        StageDefinition::hold("logo", Delay::fixed_ms(2000)),
    ]
}

fn boot_log() -> Vec<StageDefinition> {
    vec![
        StageDefinition::log(
            "boot",
            [
                "[ OK ] Loading vesni_system kernel",
                "[ OK ] Mounting /projects",
                "[ OK ] Starting security daemon",
                "[ OK ] Linking creative modules",
                "[ OK ] Reached target portfolio.target",
            ],
            Delay::between_ms(80, 260),
            Delay::between_ms(300, 600),
        ),
        StageDefinition::typewriter(
            "welcome",
            "Welcome, visitor.",
            Delay::fixed_ms(45),
            Delay::fixed_ms(900),
        ),
    ]
}

fn phone_hack() -> Vec<StageDefinition> {
    vec![
        StageDefinition::progress("scan", [4, 11], Delay::between_ms(40, 90), Delay::fixed_ms(200)),
        StageDefinition::log(
            "denied",
            ["ACCESS DENIED", "Device locked. Biometric check failed."],
            Delay::fixed_ms(150),
            Delay::fixed_ms(700),
        ),
        StageDefinition::log(
            "hack",
            [
                "$ ./exploit --target handset",
                "injecting payload...",
                "bypassing secure enclave...",
                "spawning root shell",
            ],
            Delay::between_ms(120, 320),
            Delay::fixed_ms(300),
        ),
        StageDefinition::progress(
            "breach",
            [6, 18],
            Delay::between_ms(50, 120),
            Delay::fixed_ms(200),
        ),
        StageDefinition::log(
            "override",
            ["root@handset:~# unlock --force", "SYSTEM OVERRIDE"],
            Delay::fixed_ms(200),
            Delay::fixed_ms(600),
        ),
        StageDefinition::hold("reveal", Delay::fixed_ms(1500)),
    ]
}

fn pin_breach() -> Vec<StageDefinition> {
    vec![
        StageDefinition::log(
            "brute-force",
            [
                "trying 0000... fail",
                "trying 1234... fail",
                "trying 1111... fail",
                "trying 2580... fail",
                "trying 2612... match",
            ],
            Delay::between_ms(60, 220),
            Delay::fixed_ms(300),
        ),
        StageDefinition::confirm(
            "confirm",
            ["y", "yes", "sudo", "unlock"],
            Some("PIN found: 2612. Unlock device? [y/N]"),
            Delay::fixed_ms(300),
        ),
        StageDefinition::typewriter(
            "granted",
            "ACCESS GRANTED",
            Delay::fixed_ms(60),
            Delay::fixed_ms(1200),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn every_builtin_script_is_non_empty_and_ends_in_a_reveal() {
        for script in IntroScript::ALL {
            let stages = script.stages();
            assert!(!stages.is_empty(), "{script} has no stages");
            let last = stages.last().map(|s| s.name.as_str());
            assert!(
                matches!(last, Some("logo" | "welcome" | "reveal" | "granted")),
                "{script} ends on {last:?}"
            );
        }
    }

    #[test]
    fn only_pin_breach_waits_on_input() {
        for script in IntroScript::ALL {
            let gated = script.stages().iter().any(StageDefinition::is_gated);
            assert_eq!(gated, script == IntroScript::PinBreach);
        }
    }

    #[test]
    fn champion_matches_its_timeline() {
        let stages = IntroScript::Champion.stages();
        let names: Vec<&str> = stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["type", "ball", "impact", "logo"]);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for script in IntroScript::ALL {
            assert_eq!(script.name().parse::<IntroScript>(), Ok(script));
        }
        assert_eq!("  Phone-Hack ".parse::<IntroScript>(), Ok(IntroScript::PhoneHack));
    }

    #[test]
    fn unknown_name_lists_the_choices() {
        let err = "matrix".parse::<IntroScript>().expect_err("not a script");
        let message = err.to_string();
        assert!(message.contains("matrix"));
        assert!(message.contains("pin-breach"));
    }

    #[test]
    fn script_file_loads_stages() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            r#"
[[stage]]
name = "boot"
duration_ms = 250
effect = {{ kind = "log", lines = ["hello"], line_delay_ms = [10, 20] }}

[[stage]]
name = "reveal"
duration_ms = 500
"#
        )
        .expect("write script");

        let stages = load_script_file(file.path()).expect("script should load");
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0].text_lines(), ["hello".to_string()]);
    }

    #[test]
    fn empty_script_is_rejected() {
        let err = parse_script("").expect_err("no stages");
        assert!(matches!(err, Error::Script(_)));
    }

    #[test]
    fn malformed_script_is_a_script_error() {
        let err = parse_script("[[stage]]\nduration_ms = 10\n").expect_err("missing name");
        assert!(matches!(err, Error::Script(_)));
    }

    #[test]
    fn missing_script_file_is_a_script_error() {
        let err = load_script_file("/definitely/not/here.toml").expect_err("missing");
        assert!(matches!(err, Error::Script(ref msg) if msg.starts_with("/definitely/not/here.toml: ")));
    }
}
