use pipeledger_frame::{recv_array, send_message, Message, PayloadKind};
use pipeledger_pipe::WorkerEndpoints;

use crate::error::{Result, TaskError};

/// The fixed reduction a worker performs over the received sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerRole {
    /// Inclusive prefix sums of the input sequence.
    CumulativeSum,
    /// Arithmetic mean of the input sequence.
    Average,
}

impl WorkerRole {
    /// The payload this role's response channel carries.
    pub fn payload_kind(self) -> PayloadKind {
        match self {
            WorkerRole::CumulativeSum => PayloadKind::IntArray,
            WorkerRole::Average => PayloadKind::FloatScalar,
        }
    }

    /// Execute one request/response round trip: receive the input
    /// sequence, reduce it, send the result, and return.
    ///
    /// Dropping `endpoints` on return (or on error) closes the worker's
    /// ends, so the orchestrator never blocks on a dead worker's frame.
    pub fn run(self, mut endpoints: WorkerEndpoints) -> Result<()> {
        let input: Vec<i64> = recv_array(&mut endpoints.request)?;
        if input.is_empty() {
            return Err(TaskError::EmptyInput);
        }
        drop(endpoints.request);

        tracing::debug!(role = ?self, n = input.len(), "worker received input");

        let reply = match self {
            WorkerRole::CumulativeSum => Message::IntArray(prefix_sums(&input)),
            WorkerRole::Average => Message::FloatScalar(mean(&input)),
        };

        send_message(&mut endpoints.response, &reply)?;
        Ok(())
    }
}

/// Inclusive prefix sums: `out[i] = values[0] + .. + values[i]`.
pub fn prefix_sums(values: &[i64]) -> Vec<i64> {
    let mut total = 0i64;
    values
        .iter()
        .map(|v| {
            total += v;
            total
        })
        .collect()
}

/// Arithmetic mean, computed as floating-point division of the exact
/// integer total. The `i64` accumulator holds well past 10^6 elements at
/// the maximum expense value.
pub fn mean(values: &[i64]) -> f64 {
    let total: i64 = values.iter().sum();
    total as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use pipeledger_frame::{recv_message, send_array};
    use pipeledger_pipe::{pipe, WorkerEndpoints};

    use super::*;

    #[test]
    fn prefix_sums_accumulate() {
        assert_eq!(
            prefix_sums(&[10_000, 20_000, 30_000]),
            vec![10_000, 30_000, 60_000]
        );
    }

    #[test]
    fn prefix_sums_single_element() {
        assert_eq!(prefix_sums(&[7000]), vec![7000]);
    }

    #[test]
    fn last_prefix_sum_is_total() {
        let values: Vec<i64> = (0..1001).map(|i| 5000 + i).collect();
        let sums = prefix_sums(&values);

        assert_eq!(sums.len(), values.len());
        assert_eq!(*sums.last().unwrap(), values.iter().sum::<i64>());
    }

    #[test]
    fn mean_of_three() {
        assert_eq!(mean(&[10_000, 20_000, 30_000]), 20_000.0);
    }

    #[test]
    fn mean_of_single_element_is_that_element() {
        assert_eq!(mean(&[7000]), 7000.0);
    }

    #[test]
    fn mean_survives_wide_totals() {
        // 10^6 entries at the range maximum: the total (10^11) must not
        // saturate the accumulator.
        let values = vec![100_000i64; 1_000_000];
        assert_eq!(mean(&values), 100_000.0);
    }

    #[test]
    fn cumulative_sum_role_round_trip() {
        run_role_in_thread(WorkerRole::CumulativeSum, &[10_000, 20_000, 30_000], |msg| {
            assert_eq!(msg, Message::IntArray(vec![10_000, 30_000, 60_000]));
        });
    }

    #[test]
    fn average_role_round_trip() {
        run_role_in_thread(WorkerRole::Average, &[10_000, 20_000, 30_000], |msg| {
            assert_eq!(msg, Message::FloatScalar(20_000.0));
        });
    }

    #[test]
    fn role_rejects_empty_input() {
        let (request_rx, mut request_tx) = pipe().unwrap();
        let (_response_rx, response_tx) = pipe().unwrap();

        send_array::<_, i64>(&mut request_tx, &[]).unwrap();
        drop(request_tx);

        let endpoints = WorkerEndpoints {
            request: request_rx,
            response: response_tx,
        };
        let err = WorkerRole::CumulativeSum.run(endpoints).unwrap_err();
        assert!(matches!(err, TaskError::EmptyInput));
    }

    #[test]
    fn role_surfaces_truncated_input() {
        let (request_rx, mut request_tx) = pipe().unwrap();
        let (_response_rx, response_tx) = pipe().unwrap();

        // Promise 3 elements, deliver none.
        std::io::Write::write_all(&mut request_tx, &3u32.to_le_bytes()).unwrap();
        drop(request_tx);

        let endpoints = WorkerEndpoints {
            request: request_rx,
            response: response_tx,
        };
        let err = WorkerRole::Average.run(endpoints).unwrap_err();
        assert!(matches!(
            err,
            TaskError::Frame(pipeledger_frame::FrameError::Truncated { .. })
        ));
    }

    // Runs the role in a thread with hand-wired pipes; both halves live in
    // this process, which is fine for exercising the round trip itself.
    fn run_role_in_thread(role: WorkerRole, input: &[i64], check: impl FnOnce(Message)) {
        let (request_rx, mut request_tx) = pipe().unwrap();
        let (mut response_rx, response_tx) = pipe().unwrap();
        let worker_endpoints = WorkerEndpoints {
            request: request_rx,
            response: response_tx,
        };

        let handle = std::thread::spawn(move || role.run(worker_endpoints).unwrap());

        send_array(&mut request_tx, input).unwrap();
        drop(request_tx);

        let reply = recv_message(&mut response_rx, role.payload_kind()).unwrap();
        handle.join().unwrap();

        check(reply);
    }
}
