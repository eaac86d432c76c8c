use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use super::*;
use crate::config::{DashboardConfig, TriggerSpec};
use crate::training_gateway::JobType;

fn unreachable_server_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn trigger_spec(id: &str, job: Option<&str>) -> TriggerSpec {
    TriggerSpec {
        id: TriggerId::new(id),
        label: format!("Train {id}"),
        training_type: job.map(JobType::new),
    }
}

fn controller_with(server_url: String, triggers: Vec<TriggerSpec>) -> DashboardController {
    let config = DashboardConfig {
        server_url,
        probe_on_startup: false,
        triggers,
        ..DashboardConfig::default()
    };
    DashboardController::new(config)
}

fn wait_until_settled(controller: &mut DashboardController, id: &TriggerId) {
    for _ in 0..400 {
        controller.tick();
        if controller
            .ui
            .trigger(id)
            .map(|trigger| !trigger.disabled)
            .unwrap_or(true)
        {
            return;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("launch for {id} did not settle");
}

#[test]
fn builds_triggers_in_declared_order() {
    let controller = controller_with(
        unreachable_server_url(),
        vec![trigger_spec("mnist", Some("MNIST")), trigger_spec("all", None)],
    );
    let ids: Vec<&str> = controller
        .ui
        .triggers
        .iter()
        .map(|trigger| trigger.id.as_str())
        .collect();
    assert_eq!(ids, vec!["mnist", "all"]);
    assert!(controller.ui.triggers.iter().all(|trigger| !trigger.disabled));
    assert_eq!(controller.ui.status.tone, StatusTone::Idle);
}

#[test]
fn unknown_trigger_is_ignored() {
    let mut controller =
        controller_with(unreachable_server_url(), vec![trigger_spec("mnist", None)]);
    controller.launch_training(&TriggerId::new("nope"));
    controller.tick();
    assert!(!controller.ui.triggers[0].disabled);
    assert!(controller.ui.activity.entries().is_empty());
}

#[test]
fn second_launch_while_in_flight_is_ignored() {
    let mut controller =
        controller_with(unreachable_server_url(), vec![trigger_spec("mnist", Some("MNIST"))]);
    let id = TriggerId::new("mnist");
    controller.launch_training(&id);
    controller.launch_training(&id);
    assert!(controller.ui.trigger(&id).unwrap().disabled);

    wait_until_settled(&mut controller, &id);
    assert_eq!(controller.ui.activity.count_of(ActivityKind::Warning), 1);
    assert!(controller.ui.trigger(&id).unwrap().last_error.is_some());
}
