use std::path::PathBuf;

use argh::FromArgs;

use crate::simulation::config::{SessionConfig, Tier};

/// Piece preview queue and reserve simulator.
#[derive(FromArgs, Debug)]
pub struct Args {
    /// difficulty tier: novice, adept or master
    #[argh(option, short = 't', default = "Tier::default()")]
    pub tier: Tier,
    /// seed for a reproducible session
    #[argh(option, short = 's')]
    pub seed: Option<u64>,
    /// export the command history as CSV to this path on exit
    #[argh(option, short = 'H')]
    pub history: Option<PathBuf>,
}

impl Args {
    pub fn into_config(self) -> SessionConfig {
        SessionConfig {
            tier: self.tier,
            seed: self.seed,
            history_path: self.history,
        }
    }
}

pub fn load() -> Args {
    argh::from_env()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_master_without_seed() {
        let args = Args::from_args(&["piece-preview"], &[]).unwrap();
        let config = args.into_config();
        assert_eq!(config.tier, Tier::Master);
        assert_eq!(config.seed, None);
        assert!(config.history_path.is_none());
    }

    #[test]
    fn parses_all_options() {
        let args = Args::from_args(
            &["piece-preview"],
            &["-t", "novice", "--seed", "9", "--history", "out.csv"],
        )
        .unwrap();
        let config = args.into_config();
        assert_eq!(config.tier, Tier::Novice);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.history_path, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn rejects_unknown_tier() {
        assert!(Args::from_args(&["piece-preview"], &["--tier", "expert"]).is_err());
    }
}
