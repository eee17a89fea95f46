//! Tests for the loader state machine, driven by a scripted host.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use emberloom_common::HostError;

use super::*;
use crate::host::{HostSink, LoadRequest};

const URL: &str = "https://cluckfargame.com/app";

#[derive(Default)]
struct FakeState {
    requests: Vec<LoadRequest>,
    sink: Option<HostSink>,
    released: bool,
    fail_load: Option<HostError>,
}

/// Records every load and exposes the latest sink to the test.
#[derive(Clone, Default)]
struct FakeHost {
    state: Arc<Mutex<FakeState>>,
}

impl FakeHost {
    fn loads(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    fn last_request(&self) -> LoadRequest {
        self.state.lock().unwrap().requests.last().cloned().unwrap()
    }

    fn sink(&self) -> HostSink {
        self.state.lock().unwrap().sink.clone().unwrap()
    }

    fn released(&self) -> bool {
        self.state.lock().unwrap().released
    }

    fn fail_next_load(&self, err: HostError) {
        self.state.lock().unwrap().fail_load = Some(err);
    }
}

impl WebHost for FakeHost {
    fn begin_load(&mut self, request: &LoadRequest, events: HostSink) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        state.sink = Some(events);
        match state.fail_load.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn release(&mut self) {
        self.state.lock().unwrap().released = true;
    }
}

fn attached_loader() -> (WebResourceLoader, FakeHost) {
    let mut loader = WebResourceLoader::from_url_str(URL).unwrap();
    let host = FakeHost::default();
    let h = host.clone();
    loader.attach(move || Ok(h)).unwrap();
    (loader, host)
}

fn progress(loader: &mut WebResourceLoader, host: &FakeHost, fraction: f64) {
    host.sink().progress(fraction);
    loader.pump();
}

// -- construction --

#[test]
fn starts_in_standby() {
    let loader = WebResourceLoader::from_url_str(URL).unwrap();
    assert_eq!(loader.status(), &LoadStatus::Standby);
    assert!(!loader.is_attached());
    assert_eq!(loader.session().url().as_str(), URL);
    assert_eq!(loader.session().load_timeout(), Duration::from_secs(12));
}

#[test]
fn rejects_invalid_urls() {
    assert!(matches!(
        WebResourceLoader::from_url_str("not a url"),
        Err(LoaderError::Endpoint(_))
    ));
    assert!(matches!(
        WebResourceLoader::from_url_str("http://cluckfargame.com/app"),
        Err(LoaderError::Endpoint(_))
    ));
}

// -- attach --

#[test]
fn attach_issues_one_request_with_timeout() {
    let (loader, host) = attached_loader();
    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));
    assert_eq!(host.loads(), 1);
    assert_eq!(loader.loads_issued(), 1);

    let request = host.last_request();
    assert_eq!(request.url.as_str(), URL);
    assert_eq!(request.timeout, Duration::from_secs(12));
}

#[test]
fn attach_uses_session_timeout() {
    let session = LoaderSession::parse(URL)
        .unwrap()
        .with_load_timeout(Duration::from_secs(30));
    let mut loader = WebResourceLoader::new(session);
    let host = FakeHost::default();
    let h = host.clone();
    loader.attach(move || Ok(h)).unwrap();
    assert_eq!(host.last_request().timeout, Duration::from_secs(30));
}

#[test]
fn factory_failure_becomes_failure_status() {
    let mut loader = WebResourceLoader::from_url_str(URL).unwrap();
    let err = loader
        .attach(|| Err::<FakeHost, _>(HostError::Creation("no display".into())))
        .unwrap_err();
    assert!(matches!(err, LoaderError::Host(_)));
    assert_eq!(
        loader.status(),
        &LoadStatus::failure("failed to create web view: no display")
    );
    assert!(!loader.is_attached());
}

#[test]
fn begin_load_failure_becomes_failure_status() {
    let mut loader = WebResourceLoader::from_url_str(URL).unwrap();
    let host = FakeHost::default();
    host.fail_next_load(HostError::Navigation("blocked".into()));
    let h = host.clone();
    assert!(loader.attach(move || Ok(h)).is_err());
    assert_eq!(
        loader.status(),
        &LoadStatus::failure("navigation rejected: blocked")
    );
}

#[test]
fn reattach_replaces_host_and_drops_its_events() {
    let (mut loader, first) = attached_loader();
    let stale = first.sink();

    let second = FakeHost::default();
    let s = second.clone();
    loader.attach(move || Ok(s)).unwrap();

    assert!(first.released());
    assert_eq!(first.loads(), 1);
    assert_eq!(second.loads(), 1);

    stale.progress(0.9);
    stale.navigation_failed("old host");
    loader.pump();
    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));

    progress(&mut loader, &second, 0.5);
    assert_eq!(loader.status(), &LoadStatus::progressing(0.5));
}

#[test]
fn reattach_recovers_from_failure() {
    let (mut loader, host) = attached_loader();
    host.sink().navigation_failed("timeout");
    loader.pump();
    assert!(loader.status().has_error());

    let replacement = FakeHost::default();
    let r = replacement.clone();
    loader.attach(move || Ok(r)).unwrap();
    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));
}

// -- progress --

#[test]
fn example_trace_reaches_finished() {
    let (mut loader, host) = attached_loader();
    let mut stream = loader.observe();

    progress(&mut loader, &host, 0.3);
    assert_eq!(loader.status(), &LoadStatus::progressing(0.3));
    progress(&mut loader, &host, 1.0);
    assert_eq!(loader.status(), &LoadStatus::Finished);

    assert_eq!(
        stream.drain(),
        vec![
            LoadStatus::progressing(0.0),
            LoadStatus::progressing(0.3),
            LoadStatus::Finished,
        ]
    );
}

#[test]
fn increasing_progress_is_published_in_order() {
    let (mut loader, host) = attached_loader();
    let mut stream = loader.observe();

    let fractions = [0.05, 0.1, 0.1, 0.25, 0.25004, 0.6, 0.9, 1.0];
    for f in fractions {
        host.sink().progress(f);
    }
    loader.pump();

    let seen = stream.drain();
    assert_eq!(seen.last(), Some(&LoadStatus::Finished));

    let intermediate: Vec<f64> = seen.iter().filter_map(LoadStatus::progress).collect();
    assert_eq!(intermediate, vec![0.0, 0.05, 0.1, 0.25, 0.6, 0.9]);
    assert!(intermediate.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn near_identical_progress_produces_one_change() {
    let (mut loader, host) = attached_loader();
    let mut stream = loader.observe();
    stream.drain();

    host.sink().progress(0.5);
    host.sink().progress(0.50005);
    loader.pump();

    assert_eq!(stream.drain(), vec![LoadStatus::progressing(0.5)]);
}

#[test]
fn progress_above_one_finishes() {
    let (mut loader, host) = attached_loader();
    progress(&mut loader, &host, 1.7);
    assert_eq!(loader.status(), &LoadStatus::Finished);
}

#[test]
fn completion_within_epsilon_of_last_fraction_finishes() {
    let (mut loader, host) = attached_loader();
    progress(&mut loader, &host, 0.5);
    progress(&mut loader, &host, 0.99995);
    assert_eq!(loader.status(), &LoadStatus::progressing(0.99995));

    progress(&mut loader, &host, 1.0);
    assert_eq!(loader.status(), &LoadStatus::Finished);
}

#[test]
fn negative_progress_clamps_and_nan_is_ignored() {
    let (mut loader, host) = attached_loader();
    progress(&mut loader, &host, 0.4);
    progress(&mut loader, &host, f64::NAN);
    assert_eq!(loader.status(), &LoadStatus::progressing(0.4));

    progress(&mut loader, &host, -3.0);
    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));
}

#[test]
fn progress_does_not_regress_terminal_states() {
    let (mut loader, host) = attached_loader();
    progress(&mut loader, &host, 1.0);
    progress(&mut loader, &host, 0.2);
    assert_eq!(loader.status(), &LoadStatus::Finished);

    host.sink().navigation_failed("boom");
    loader.pump();
    progress(&mut loader, &host, 0.5);
    assert_eq!(loader.status(), &LoadStatus::failure("boom"));
}

// -- failure --

#[test]
fn example_failure_trace() {
    let (mut loader, host) = attached_loader();
    progress(&mut loader, &host, 0.1);
    host.sink().navigation_failed("timeout");
    loader.pump();
    assert_eq!(loader.status(), &LoadStatus::failure("timeout"));
}

#[test]
fn failure_after_finished_regresses() {
    let (mut loader, host) = attached_loader();
    progress(&mut loader, &host, 1.0);
    host.sink().navigation_failed("connection reset");
    loader.pump();
    assert_eq!(loader.status(), &LoadStatus::failure("connection reset"));
}

#[test]
fn failure_does_not_retry_by_itself() {
    let (mut loader, host) = attached_loader();
    host.sink().navigation_failed("dns");
    loader.pump();
    loader.pump();
    assert_eq!(host.loads(), 1);
}

// -- connectivity --

#[test]
fn offline_discards_in_flight_progress() {
    let (mut loader, host) = attached_loader();
    progress(&mut loader, &host, 0.6);
    loader.set_connectivity(false);
    assert_eq!(loader.status(), &LoadStatus::NoConnection);

    progress(&mut loader, &host, 0.8);
    assert_eq!(loader.status(), &LoadStatus::NoConnection);
}

#[test]
fn offline_abandons_in_flight_load() {
    let (mut loader, host) = attached_loader();
    let abandoned = host.sink();
    loader.set_connectivity(false);
    assert!(host.released());

    abandoned.navigation_failed("The request timed out.");
    loader.pump();
    assert_eq!(loader.status(), &LoadStatus::NoConnection);

    loader.set_connectivity(true);
    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));
    assert_eq!(host.loads(), 2);
}

#[test]
fn repeated_offline_is_noop() {
    let (mut loader, host) = attached_loader();
    loader.set_connectivity(false);
    let generation = loader.generation;
    loader.set_connectivity(false);
    assert_eq!(loader.generation, generation);
    assert_eq!(host.loads(), 1);
}

#[test]
fn offline_overrides_finished() {
    let (mut loader, host) = attached_loader();
    progress(&mut loader, &host, 1.0);
    loader.set_connectivity(false);
    assert_eq!(loader.status(), &LoadStatus::NoConnection);
}

#[test]
fn reconnect_reloads_exactly_once() {
    let (mut loader, host) = attached_loader();
    loader.set_connectivity(false);
    loader.set_connectivity(true);

    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));
    assert_eq!(host.loads(), 2);

    // Already online: no further loads.
    loader.set_connectivity(true);
    assert_eq!(host.loads(), 2);
}

#[test]
fn reconnect_drops_events_from_previous_load() {
    let (mut loader, host) = attached_loader();
    let old = host.sink();
    loader.set_connectivity(false);
    loader.set_connectivity(true);

    old.progress(0.7);
    loader.pump();
    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));

    progress(&mut loader, &host, 0.7);
    assert_eq!(loader.status(), &LoadStatus::progressing(0.7));
}

#[test]
fn online_is_noop_outside_no_connection() {
    let (mut loader, host) = attached_loader();
    progress(&mut loader, &host, 0.3);
    loader.set_connectivity(true);
    assert_eq!(loader.status(), &LoadStatus::progressing(0.3));
    assert_eq!(host.loads(), 1);
}

#[test]
fn reconnect_without_host_stays_offline() {
    let mut loader = WebResourceLoader::from_url_str(URL).unwrap();
    loader.set_connectivity(false);
    loader.set_connectivity(true);
    assert_eq!(loader.status(), &LoadStatus::NoConnection);
    assert_eq!(loader.loads_issued(), 0);
}

#[test]
fn attach_while_offline_defers_load() {
    let mut loader = WebResourceLoader::from_url_str(URL).unwrap();
    loader.set_connectivity(false);

    let host = FakeHost::default();
    let h = host.clone();
    loader.attach(move || Ok(h)).unwrap();
    assert_eq!(loader.status(), &LoadStatus::NoConnection);
    assert_eq!(host.loads(), 0);

    loader.set_connectivity(true);
    assert_eq!(host.loads(), 1);
    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));
}

#[test]
fn handle_queues_connectivity() {
    let (mut loader, host) = attached_loader();
    let handle = loader.handle();
    assert!(handle.set_connectivity(false));
    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));

    assert_eq!(loader.pump(), 1);
    assert_eq!(loader.status(), &LoadStatus::NoConnection);

    handle.set_connectivity(true);
    loader.pump();
    assert_eq!(host.loads(), 2);
}

// -- retry --

#[test]
fn retry_from_failure_reloads() {
    let (mut loader, host) = attached_loader();
    host.sink().navigation_failed("500");
    loader.pump();

    loader.retry().unwrap();
    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));
    assert_eq!(host.loads(), 2);
}

#[test]
fn retry_outside_failure_is_rejected() {
    let (mut loader, _host) = attached_loader();
    let err = loader.retry().unwrap_err();
    assert_eq!(
        err,
        LoaderError::NotRetryable {
            status: "Loading 0%".into()
        }
    );
}

#[test]
fn retry_without_host_is_rejected() {
    let mut loader = WebResourceLoader::from_url_str(URL).unwrap();
    let _ = loader.attach(|| Err::<FakeHost, _>(HostError::Unavailable("x".into())));
    assert_eq!(loader.retry().unwrap_err(), LoaderError::NotAttached);
}

// -- observation --

#[test]
fn late_observer_sees_finished_first() {
    let (mut loader, host) = attached_loader();
    progress(&mut loader, &host, 0.5);
    progress(&mut loader, &host, 1.0);

    let mut stream = loader.observe();
    assert_eq!(stream.try_recv(), Some(LoadStatus::Finished));
    assert_eq!(stream.try_recv(), None);
}

#[test]
fn observers_are_independent() {
    let (mut loader, host) = attached_loader();
    let mut a = loader.observe();
    progress(&mut loader, &host, 0.5);
    let mut b = loader.observe();
    progress(&mut loader, &host, 1.0);

    assert_eq!(a.drain().len(), 3);
    assert_eq!(
        b.drain(),
        vec![LoadStatus::progressing(0.5), LoadStatus::Finished]
    );
}

// -- threading and teardown --

#[test]
fn events_from_other_threads_apply_on_pump() {
    let (mut loader, host) = attached_loader();
    let sink = host.sink();

    std::thread::spawn(move || {
        for i in 1..=10 {
            sink.progress(f64::from(i) / 10.0);
        }
    })
    .join()
    .unwrap();

    assert_eq!(loader.status(), &LoadStatus::progressing(0.0));
    assert_eq!(loader.pump(), 10);
    assert_eq!(loader.status(), &LoadStatus::Finished);
}

#[tokio::test]
async fn process_next_applies_one_event() {
    let (mut loader, host) = attached_loader();
    let sink = host.sink();
    tokio::spawn(async move {
        sink.progress(0.4);
    });

    assert!(loader.process_next().await);
    assert_eq!(loader.status(), &LoadStatus::progressing(0.4));
}

#[tokio::test]
async fn teardown_releases_and_closes() {
    let (mut loader, host) = attached_loader();
    let sink = host.sink();
    let handle = loader.handle();
    let mut stream = loader.observe();

    loader.teardown();

    assert!(host.released());
    assert!(sink.is_closed());
    assert!(!sink.progress(0.5));
    assert!(handle.is_closed());
    assert!(!handle.set_connectivity(false));

    assert_eq!(stream.recv().await, Some(LoadStatus::progressing(0.0)));
    assert_eq!(stream.recv().await, None);
}

#[test]
fn drop_releases_host() {
    let (loader, host) = attached_loader();
    drop(loader);
    assert!(host.released());
}
