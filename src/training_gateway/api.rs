//! HTTP calls against the coordinator endpoints.

use serde::Serialize;

use crate::http_client;

use super::{GatewayError, JobType, LaunchOutcome};

const TRAINING_PATH: &str = "/training";
const MAX_BANNER_BYTES: usize = 8 * 1024;

#[derive(Serialize)]
struct TrainingRequest<'a> {
    training_type: &'a str,
}

/// Ask the coordinator to start one training round.
///
/// Sends `POST /training` with a JSON body naming the workload when `job` is
/// present, and with no body and no content type otherwise. Any received
/// status is an outcome; only a failure to reach the coordinator is an error.
pub fn request_training(
    server_url: &str,
    job: Option<&JobType>,
) -> Result<LaunchOutcome, GatewayError> {
    let url = join_endpoint(server_url, TRAINING_PATH);
    let request = http_client::agent().post(&url);
    let response = match job {
        Some(job) => {
            let body = serde_json::to_string(&TrainingRequest {
                training_type: job.as_str(),
            })?;
            request
                .set("Content-Type", "application/json")
                .send_string(&body)
        }
        None => request.call(),
    };
    match response {
        Ok(response) => Ok(outcome_from_status(response.status())),
        Err(ureq::Error::Status(status, _)) => Ok(LaunchOutcome::Rejected { status }),
        Err(ureq::Error::Transport(err)) => Err(GatewayError::Transport(err.to_string())),
    }
}

/// Fetch the coordinator's human-readable status line from its root page.
pub fn fetch_server_banner(server_url: &str) -> Result<String, GatewayError> {
    let response = http_client::agent().get(server_url).call().map_err(|err| match err {
        ureq::Error::Status(status, _) => GatewayError::UnexpectedStatus { status },
        ureq::Error::Transport(err) => GatewayError::Transport(err.to_string()),
    })?;
    let text = http_client::read_response_text(response, MAX_BANNER_BYTES)?;
    Ok(first_line(&text))
}

fn outcome_from_status(status: u16) -> LaunchOutcome {
    if status == 200 {
        LaunchOutcome::Started
    } else {
        LaunchOutcome::Rejected { status }
    }
}

fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[test]
    fn training_request_body_names_the_workload() {
        let body = serde_json::to_string(&TrainingRequest {
            training_type: "MNIST",
        })
        .unwrap();
        assert_eq!(body, r#"{"training_type":"MNIST"}"#);
    }

    #[test]
    fn status_200_maps_to_started() {
        assert_eq!(outcome_from_status(200), LaunchOutcome::Started);
    }

    #[test]
    fn other_statuses_map_to_rejected() {
        assert_eq!(
            outcome_from_status(204),
            LaunchOutcome::Rejected { status: 204 }
        );
        assert_eq!(
            outcome_from_status(302),
            LaunchOutcome::Rejected { status: 302 }
        );
    }

    #[test]
    fn join_endpoint_tolerates_trailing_slash() {
        assert_eq!(
            join_endpoint("http://127.0.0.1:5000/", TRAINING_PATH),
            "http://127.0.0.1:5000/training"
        );
        assert_eq!(
            join_endpoint("http://127.0.0.1:5000", TRAINING_PATH),
            "http://127.0.0.1:5000/training"
        );
    }

    #[test]
    fn first_line_trims_and_truncates() {
        assert_eq!(first_line("running\nsecond"), "running");
        assert_eq!(first_line("  running  "), "running");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn error_status_is_a_rejected_outcome() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\n\r\n".to_string(),
        );
        let outcome = request_training(&url, None).unwrap();
        assert_eq!(outcome, LaunchOutcome::Rejected { status: 503 });
    }

    #[test]
    fn unreachable_coordinator_is_a_transport_error() {
        let url = unreachable_url();
        let err = request_training(&url, None).unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[test]
    fn banner_returns_first_line_of_body() {
        let body = "Federated Learning server running. Status: IDLE";
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        assert_eq!(fetch_server_banner(&url).unwrap(), body);
    }

    #[test]
    fn banner_error_status_is_surfaced() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\n\r\n".to_string(),
        );
        let err = fetch_server_banner(&url).unwrap_err();
        assert!(matches!(err, GatewayError::UnexpectedStatus { status: 500 }));
    }
}
