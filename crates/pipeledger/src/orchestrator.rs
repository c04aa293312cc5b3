use rand::Rng;

use pipeledger_frame::{recv_message, send_array, Message};
use pipeledger_task::{spawn_workers, WorkerHandle, WorkerRole};
use tracing::{debug, error, warn};

use crate::exit::{task_error, CliError, CliResult, FAILURE, SUCCESS};
use crate::output;

/// Inclusive range the generated expense values are drawn from.
const EXPENSE_MIN: i64 = 5_000;
const EXPENSE_MAX: i64 = 100_000;

/// Run the full pipeline for the given `<n>` argument.
///
/// Validation failures and anything that goes wrong before or during
/// spawning are fatal. Once the workers exist, protocol failures are
/// logged and degrade the rendering instead of aborting, and the workers
/// are always reaped.
pub fn run(n_arg: &str) -> CliResult<i32> {
    let n = parse_count(n_arg)?;
    let expenses = generate_expenses(n);
    debug!(n, "generated expense sequence");

    let mut handles = spawn_workers(vec![WorkerRole::CumulativeSum, WorkerRole::Average])
        .map_err(|err| task_error("failed to start workers", err))?;

    for handle in &mut handles {
        send_input(handle, &expenses);
    }

    // Receive in worker order: cumulative sums first, then the mean.
    // The workers run independently; this ordering is only for output
    // determinism.
    let mut cumulative: Option<Vec<i64>> = None;
    let mut average: Option<f64> = None;
    for handle in &mut handles {
        match receive_result(handle) {
            Some(Message::IntArray(values)) => cumulative = Some(values),
            Some(Message::FloatScalar(value)) => average = Some(value),
            None => {}
        }
    }

    // Reap unconditionally, even after protocol failures.
    for handle in &mut handles {
        match handle.wait() {
            Ok(0) => {}
            Ok(code) => warn!(worker = handle.id, code, "worker exited with failure"),
            Err(err) => error!(worker = handle.id, error = %err, "failed to reap worker"),
        }
    }

    let stdout = std::io::stdout();
    output::render(
        &mut stdout.lock(),
        &expenses,
        cumulative.as_deref(),
        average,
    )
    .map_err(|err| CliError::new(FAILURE, format!("failed writing output: {err}")))?;

    Ok(SUCCESS)
}

/// Parse and validate `<n>`: a decimal integer, odd and greater than zero.
fn parse_count(arg: &str) -> CliResult<usize> {
    let n: i64 = arg
        .trim()
        .parse()
        .map_err(|_| CliError::usage(format!("<n> is not a valid integer: {arg:?}")))?;

    if n <= 0 {
        return Err(CliError::usage(format!(
            "<n> must be greater than 0 (got {n})"
        )));
    }
    if n % 2 == 0 {
        return Err(CliError::usage(format!("<n> must be odd (got {n})")));
    }

    Ok(n as usize)
}

/// Draw `n` expense values uniformly from `[EXPENSE_MIN, EXPENSE_MAX]`.
fn generate_expenses(n: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(EXPENSE_MIN..=EXPENSE_MAX)).collect()
}

/// Send the input sequence and close the request stream. Failures are
/// diagnostics only; the worker will observe the truncation itself.
fn send_input(handle: &mut WorkerHandle, expenses: &[i64]) {
    let Some(mut request) = handle.request.take() else {
        return;
    };
    if let Err(err) = send_array(&mut request, expenses) {
        error!(worker = handle.id, role = ?handle.role, error = %err, "failed sending input");
    }
}

/// Receive one worker's framed result; on failure, log and return `None`
/// so the rendering omits that section instead of printing garbage.
fn receive_result(handle: &mut WorkerHandle) -> Option<Message> {
    let mut response = handle.response.take()?;
    match recv_message(&mut response, handle.role.payload_kind()) {
        Ok(message) => Some(message),
        Err(err) => {
            error!(worker = handle.id, role = ?handle.role, error = %err, "failed receiving result");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_accepts_odd_positive() {
        assert_eq!(parse_count("7").unwrap(), 7);
        assert_eq!(parse_count("1").unwrap(), 1);
        assert_eq!(parse_count(" 10001 ").unwrap(), 10_001);
    }

    #[test]
    fn parse_count_rejects_even() {
        assert!(parse_count("4").is_err());
    }

    #[test]
    fn parse_count_rejects_non_positive() {
        assert!(parse_count("0").is_err());
        assert!(parse_count("-3").is_err());
    }

    #[test]
    fn parse_count_rejects_non_numeric() {
        assert!(parse_count("abc").is_err());
        assert!(parse_count("3.5").is_err());
        assert!(parse_count("").is_err());
    }

    #[test]
    fn generated_expenses_stay_in_range() {
        let expenses = generate_expenses(101);
        assert_eq!(expenses.len(), 101);
        assert!(expenses
            .iter()
            .all(|v| (EXPENSE_MIN..=EXPENSE_MAX).contains(v)));
    }
}
