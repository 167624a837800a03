//! Session persistence — save, load and continue a run.

use pdgrid_core::observe::NullSink;
use pdgrid_core::payoff::PayoffMatrix;
use pdgrid_core::types::*;
use pdgrid_runtime::config::ModelConfig;
use pdgrid_runtime::model::Model;
use pdgrid_runtime::session::{load_session, save_session};

fn config(schedule: ScheduleType) -> ModelConfig {
    ModelConfig::with_size(8, 8)
        .seed(31)
        .schedule(schedule)
        .payoff(PayoffMatrix::new(3.0, 0.0, 5.0, 1.0).unwrap())
}

#[test]
fn restored_model_continues_identically() {
    let dir = tempfile::tempdir().unwrap();

    for schedule in [ScheduleType::Sequential, ScheduleType::Random, ScheduleType::Simultaneous] {
        let path = dir.path().join(format!("{}.json", schedule));
        let mut original = Model::with_config(config(schedule)).unwrap();
        original.run(3).unwrap();
        save_session(&original, &path).unwrap();

        let session = load_session(&path).unwrap();
        assert_eq!(session.metadata.tick, 3);
        assert_eq!(session.metadata.agent_count, 64);

        let mut restored = Model::from_session(session, NullSink).unwrap();
        assert_eq!(restored.current_tick(), 3);
        assert_eq!(restored.grid().agents(), original.grid().agents());

        let a = original.run(4).unwrap();
        let b = restored.run(4).unwrap();
        assert_eq!(a, b, "schedule {}", schedule);
        assert_eq!(restored.grid().agents(), original.grid().agents());
        assert_eq!(restored.history().len(), original.history().len());
        assert_eq!(restored.history()[4..], original.history()[4..]);
    }
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs").join("nested").join("session.json");
    let model = Model::with_config(config(ScheduleType::Random)).unwrap();
    save_session(&model, &path).unwrap();
    assert!(path.exists());

    let json = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metadata"]["width"], 8);
    assert!(value["agents"][0]["move"].is_string());
}

#[test]
fn loading_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_session(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, pdgrid_core::error::PdError::Io(_)));
}
