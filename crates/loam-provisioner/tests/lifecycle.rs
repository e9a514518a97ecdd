use loam_api::{ApiError, BoxFuture, DatastoreClient};
use loam_core::Severity;
use loam_provisioner::{
    destroy, plan_size, record_applied, refresh, DatastoreResource, ResourceAddr, TrackedResource,
    TrackedState, VolumeResource,
};
use serde_json::json;

struct StubDisk {
    id: &'static str,
    size: i64,
    read_err: Option<fn() -> ApiError>,
    delete_err: Option<fn() -> ApiError>,
}

impl StubDisk {
    fn healthy(id: &'static str, size: i64) -> Self {
        Self {
            id,
            size,
            read_err: None,
            delete_err: None,
        }
    }
}

impl DatastoreResource for StubDisk {
    fn kind(&self) -> &str {
        "disk"
    }

    fn id(&self) -> &str {
        self.id
    }

    fn read(&self) -> BoxFuture<'_, Result<serde_json::Value, ApiError>> {
        Box::pin(async move {
            match self.read_err {
                Some(make_err) => Err(make_err()),
                None => Ok(json!({"size": self.size, "format": "raw"})),
            }
        })
    }

    fn delete(&self) -> BoxFuture<'_, Result<(), ApiError>> {
        Box::pin(async move {
            match self.delete_err {
                Some(make_err) => Err(make_err()),
                None => Ok(()),
            }
        })
    }
}

fn tracked(state: &mut TrackedState, addr: &ResourceAddr, baseline: i64) {
    let mut entry = TrackedResource::new(addr.resource_kind.clone(), addr.resource_name.clone());
    entry.set_baseline(baseline);
    state.insert(addr.clone(), entry);
}

#[test]
fn plan_size_pins_plan_to_baseline_on_drift() {
    let mut state = TrackedState::default();
    let addr = ResourceAddr::new("disk", "local:100/vm-100-disk-0");
    tracked(&mut state, &addr, 100);

    let resp = plan_size(&state, &addr, 150, true);

    assert!(resp.requires_replace);
    assert_eq!(resp.plan_value, Some(100));
    assert!(resp.check().is_ok());
    assert!(resp.diagnostics.has_warnings());
}

#[test]
fn plan_size_without_tracked_entry_is_noop() {
    let state = TrackedState::default();
    let addr = ResourceAddr::new("disk", "local:100/vm-100-disk-0");

    let resp = plan_size(&state, &addr, 150, true);

    assert!(!resp.requires_replace);
    assert!(resp.plan_value.is_none());
    assert!(resp.diagnostics.is_empty());
}

#[test]
fn plan_size_with_corrupt_baseline_aborts() {
    let mut state = TrackedState::default();
    let addr = ResourceAddr::new("disk", "local:100/vm-100-disk-0");
    let mut entry = TrackedResource::new("disk", "local:100/vm-100-disk-0");
    entry
        .private
        .insert("original_state_size".to_string(), b"garbage".to_vec());
    state.insert(addr.clone(), entry);

    let resp = plan_size(&state, &addr, 150, true);

    assert!(!resp.requires_replace);
    assert!(resp.check().is_err());
}

#[tokio::test]
async fn refresh_updates_properties_without_touching_baseline() {
    let disk = StubDisk::healthy("local:100/vm-100-disk-0", 2048);
    let mut state = TrackedState::default();
    tracked(&mut state, &disk.addr(), 100);

    let resp = refresh(&disk, &mut state, "Disk no longer exists").await;

    assert!(resp.diagnostics.is_empty());
    assert!(!resp.remove_from_state);

    let entry = state.get(&disk.addr()).unwrap();
    assert_eq!(entry.baseline(), Some(b"100".as_slice()));
    assert_eq!(entry.properties["size"], 2048);
    assert_eq!(entry.properties["format"], "raw");
}

#[tokio::test]
async fn refresh_of_untracked_resource_tracks_it_without_baseline() {
    let disk = StubDisk::healthy("local:100/vm-100-disk-0", 2048);
    let mut state = TrackedState::default();

    refresh(&disk, &mut state, "Disk no longer exists").await;

    let entry = state.get(&disk.addr()).unwrap();
    assert_eq!(entry.baseline(), None);
    assert_eq!(entry.properties["size"], 2048);
}

#[tokio::test]
async fn out_of_band_resize_survives_refresh_then_plan() {
    // Applied at 100, then resized to 150 behind the tool's back.
    let disk = StubDisk::healthy("local:100/vm-100-disk-0", 150);
    let mut state = TrackedState::default();
    record_applied(&mut state, &disk, 100, json!({"size": 100, "format": "raw"}));

    refresh(&disk, &mut state, "Disk no longer exists").await;

    let entry = state.get(&disk.addr()).unwrap();
    assert_eq!(entry.baseline(), Some(b"100".as_slice()));
    assert_eq!(entry.properties["size"], 150);

    let resp = plan_size(&state, &disk.addr(), 150, true);
    assert!(resp.requires_replace);
    assert_eq!(resp.plan_value, Some(100));
    assert!(resp.diagnostics.has_warnings());
}

#[tokio::test]
async fn refresh_drops_vanished_resource_from_state() {
    let disk = StubDisk {
        id: "local:100/vm-100-disk-0",
        size: 0,
        read_err: Some(|| ApiError::Remote("volume not found".to_string())),
        delete_err: None,
    };
    let mut state = TrackedState::default();
    tracked(&mut state, &disk.addr(), 100);

    let resp = refresh(&disk, &mut state, "Disk no longer exists").await;

    assert!(resp.remove_from_state);
    assert!(!state.contains(&disk.addr()));
    assert!(resp.check().is_ok());

    let warning = resp.diagnostics.iter().next().unwrap();
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.summary, "Disk no longer exists");
}

#[tokio::test]
async fn refresh_auth_failure_keeps_state_entry() {
    let disk = StubDisk {
        id: "local:100/vm-100-disk-0",
        size: 0,
        read_err: Some(|| ApiError::Authentication("token expired".to_string())),
        delete_err: None,
    };
    let mut state = TrackedState::default();
    tracked(&mut state, &disk.addr(), 100);

    let resp = refresh(&disk, &mut state, "Disk no longer exists").await;

    assert!(!resp.remove_from_state);
    assert!(state.contains(&disk.addr()));
    assert!(resp.check().is_err());
}

#[tokio::test]
async fn destroy_removes_state_entry_on_success() {
    let disk = StubDisk::healthy("local:100/vm-100-disk-0", 100);
    let mut state = TrackedState::default();
    tracked(&mut state, &disk.addr(), 100);

    let resp = destroy(&disk, &mut state).await;

    assert!(resp.diagnostics.is_empty());
    assert!(!state.contains(&disk.addr()));
}

#[tokio::test]
async fn destroy_of_already_absent_item_is_silent() {
    let disk = StubDisk {
        id: "local:100/vm-100-disk-0",
        size: 0,
        read_err: None,
        delete_err: Some(|| ApiError::ResourceDoesNotExist),
    };
    let mut state = TrackedState::default();
    tracked(&mut state, &disk.addr(), 100);

    let resp = destroy(&disk, &mut state).await;

    assert!(resp.diagnostics.is_empty());
    assert!(!state.contains(&disk.addr()));
}

#[tokio::test]
async fn destroy_with_unparseable_identifier_warns_and_cleans_up() {
    let disk = StubDisk {
        id: "local:100/vm-100-disk-0",
        size: 0,
        read_err: None,
        delete_err: Some(|| ApiError::Remote("unable to parse volume identifier".to_string())),
    };
    let mut state = TrackedState::default();
    tracked(&mut state, &disk.addr(), 100);

    let resp = destroy(&disk, &mut state).await;

    assert!(!state.contains(&disk.addr()));
    assert!(resp.diagnostics.has_warnings());
    assert!(resp.check().is_ok());
}

#[tokio::test]
async fn destroy_failure_keeps_state_entry() {
    let disk = StubDisk {
        id: "local:100/vm-100-disk-0",
        size: 0,
        read_err: None,
        delete_err: Some(|| ApiError::Remote("datastore is read-only".to_string())),
    };
    let mut state = TrackedState::default();
    tracked(&mut state, &disk.addr(), 100);

    let resp = destroy(&disk, &mut state).await;

    assert!(state.contains(&disk.addr()));
    assert!(resp.check().is_err());
}

struct StubClient;

impl DatastoreClient for StubClient {
    fn read_item(&self, _volume_id: &str) -> BoxFuture<'_, Result<serde_json::Value, ApiError>> {
        Box::pin(async move { Ok(json!({"size": 512})) })
    }

    fn delete_item(&self, _volume_id: &str) -> BoxFuture<'_, Result<(), ApiError>> {
        Box::pin(async move { Ok(()) })
    }
}

#[tokio::test]
async fn client_backed_resource_drives_the_same_lifecycle() {
    let client = StubClient;
    let file = VolumeResource::new("file", "local:iso/debian.iso", &client);
    let mut state = TrackedState::default();

    let resp = refresh(&file, &mut state, "File no longer exists").await;
    assert!(resp.diagnostics.is_empty());
    assert!(state.contains(&file.addr()));
    assert_eq!(state.get(&file.addr()).unwrap().properties["size"], 512);

    let resp = destroy(&file, &mut state).await;
    assert!(resp.diagnostics.is_empty());
    assert!(!state.contains(&file.addr()));
}
