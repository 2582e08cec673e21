//! Command execution: validated arguments in, output lines out.

use crypto_random_core::entropy::EntropySource;
use crypto_random_core::error::RandomError;
use crypto_random_core::random::{random_float, random_int};
use crypto_random_core::selector::pick_winners;
use crypto_random_core::shuffle::shuffle;
use tracing::info;

use crate::cli::Command;
use crate::input::read_lines;

/// Runs `command` and returns the lines to print.
///
/// Nothing is written anywhere from here, so a failure never leaves partial
/// output behind.
///
/// # Errors
///
/// Returns `RandomError` for invalid arguments, unreadable or empty input
/// files, and entropy failures.
pub fn execute(
    command: &Command,
    source: &mut dyn EntropySource,
) -> Result<Vec<String>, RandomError> {
    match command {
        Command::Int { max_exclusive } => {
            let bound = bound_from_arg(*max_exclusive)?;
            let value = random_int(source, bound)?;
            info!(bound, "drew bounded integer");
            Ok(vec![value.to_string()])
        }
        Command::Float => {
            let value = random_float(source)?;
            info!("drew unit float");
            Ok(vec![value.to_string()])
        }
        Command::Shuffle { file } => {
            let lines = read_lines(file)?;
            let shuffled = shuffle(source, &lines)?;
            info!(lines = shuffled.len(), "shuffled input");
            Ok(shuffled)
        }
        Command::Winners { file, count } => {
            let count = count_from_arg(*count)?;
            let lines = read_lines(file)?;
            if lines.is_empty() {
                return Err(RandomError::EmptyInput);
            }
            let winners = pick_winners(source, &lines, count)?;
            info!(count, candidates = lines.len(), "picked winners");
            Ok(winners)
        }
    }
}

/// Zero is passed through so the generator reports it; only values no
/// `u64` can hold are rejected here.
fn bound_from_arg(raw: i128) -> Result<u64, RandomError> {
    if raw < 0 {
        return Err(RandomError::invalid_argument(
            "maxExclusive must be a positive integer",
        ));
    }
    u64::try_from(raw).map_err(|_| {
        RandomError::invalid_argument(format!("maxExclusive must be at most {}", u64::MAX))
    })
}

/// Checked before the file is read, so a bad count fails fast.
fn count_from_arg(raw: i128) -> Result<usize, RandomError> {
    if raw <= 0 {
        return Err(RandomError::invalid_argument(
            "count must be a positive integer",
        ));
    }
    // No list can hold more than usize::MAX lines.
    usize::try_from(raw).map_err(|_| {
        RandomError::invalid_argument("count cannot be greater than number of lines")
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crypto_random_test_support::{
        ConstantEntropy, FailingEntropy, SequenceEntropy, TempLineFile,
    };

    use super::*;

    #[test]
    fn test_int_formats_drawn_value() {
        let mut source = SequenceEntropy::from_u32s(&[42]);
        let output = execute(&Command::Int { max_exclusive: 100 }, &mut source).unwrap();
        assert_eq!(output, vec!["42"]);
    }

    #[test]
    fn test_int_rejects_zero_and_negative() {
        for raw in [0, -1, -100] {
            let err = execute(
                &Command::Int { max_exclusive: raw },
                &mut SequenceEntropy::new(Vec::new()),
            )
            .unwrap_err();
            assert_eq!(err.to_string(), "maxExclusive must be a positive integer");
        }
    }

    #[test]
    fn test_int_rejects_bound_above_u64() {
        let raw = i128::from(u64::MAX) + 1;
        let err = execute(
            &Command::Int { max_exclusive: raw },
            &mut SequenceEntropy::new(Vec::new()),
        )
        .unwrap_err();
        assert!(matches!(err, RandomError::InvalidArgument(_)));
    }

    #[test]
    fn test_int_accepts_u64_max_bound() {
        let raw = i128::from(u64::MAX);
        let mut source = SequenceEntropy::from_u64s(&[7]);
        let output = execute(&Command::Int { max_exclusive: raw }, &mut source).unwrap();
        assert_eq!(output, vec!["7"]);
    }

    #[test]
    fn test_float_formats_drawn_value() {
        let mut source = SequenceEntropy::new(vec![0x80, 0, 0, 0, 0, 0]);
        let output = execute(&Command::Float, &mut source).unwrap();
        assert_eq!(output, vec!["0.5"]);

        let output = execute(&Command::Float, &mut ConstantEntropy(0)).unwrap();
        assert_eq!(output, vec!["0"]);
    }

    #[test]
    fn test_shuffle_reads_and_permutes_file() {
        let file = TempLineFile::with_lines(&["a", "b", "c"]);
        // [a,b,c] -> swap(2,0) [c,b,a] -> swap(1,0) [b,c,a]
        let mut source = SequenceEntropy::from_u32s(&[0, 0]);
        let output = execute(
            &Command::Shuffle {
                file: file.path().to_path_buf(),
            },
            &mut source,
        )
        .unwrap();
        assert_eq!(output, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_shuffle_of_blank_file_is_empty() {
        let file = TempLineFile::with_contents("\n   \n\r\n");
        let output = execute(
            &Command::Shuffle {
                file: file.path().to_path_buf(),
            },
            &mut SequenceEntropy::new(Vec::new()),
        )
        .unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_winners_checks_count_before_reading_file() {
        let err = execute(
            &Command::Winners {
                file: PathBuf::from("does-not-matter.txt"),
                count: 0,
            },
            &mut SequenceEntropy::new(Vec::new()),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "count must be a positive integer");
    }

    #[test]
    fn test_winners_on_blank_file_is_empty_input() {
        let file = TempLineFile::with_contents("\n\n");
        let err = execute(
            &Command::Winners {
                file: file.path().to_path_buf(),
                count: 1,
            },
            &mut SequenceEntropy::new(Vec::new()),
        )
        .unwrap_err();
        assert!(matches!(err, RandomError::EmptyInput));
    }

    #[test]
    fn test_winners_count_above_line_count() {
        let file = TempLineFile::with_lines(&["a", "b", "c", "d", "e"]);
        let err = execute(
            &Command::Winners {
                file: file.path().to_path_buf(),
                count: 10,
            },
            &mut SequenceEntropy::new(Vec::new()),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "count cannot be greater than number of lines"
        );
    }

    #[test]
    fn test_winners_missing_file() {
        let err = execute(
            &Command::Winners {
                file: TempLineFile::unused_path(),
                count: 1,
            },
            &mut SequenceEntropy::new(Vec::new()),
        )
        .unwrap_err();
        assert!(matches!(err, RandomError::FileNotFound(_)));
    }

    #[test]
    fn test_entropy_failure_propagates() {
        let err = execute(&Command::Float, &mut FailingEntropy).unwrap_err();
        assert!(err.is_fatal());
    }
}
