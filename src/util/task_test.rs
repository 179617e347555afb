use super::*;

use std::cell::Cell;
use std::rc::Rc;

use futures::executor::LocalPool;

use crate::util::manual_timer::ManualTimer;
use crate::util::timer::Timer;

#[test]
fn spawned_task_runs_to_completion() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);

    let handle = spawn_cancellable(&spawner, "noop", async move { flag.set(true) }).unwrap();
    pool.run_until_stalled();

    assert!(ran.get());
    assert!(!handle.is_cancelled());
}

#[test]
fn cancel_stops_task_at_next_await() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let timer = ManualTimer::new();
    let stage = Rc::new(Cell::new(0));

    let t = timer.clone();
    let s = Rc::clone(&stage);
    let handle = spawn_cancellable(&spawner, "staged", async move {
        s.set(1);
        t.sleep(50).await;
        s.set(2);
    })
    .unwrap();

    pool.run_until_stalled();
    assert_eq!(stage.get(), 1);

    handle.cancel();
    assert!(handle.is_cancelled());
    timer.advance(50);
    pool.run_until_stalled();
    assert_eq!(stage.get(), 1);
}

#[test]
fn cancel_is_idempotent() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let handle = spawn_cancellable(&spawner, "idle", futures::future::pending::<()>()).unwrap();
    handle.cancel();
    handle.cancel();
    pool.run_until_stalled();
    assert!(handle.is_cancelled());
}

#[test]
fn spawn_on_dropped_pool_reports_error() {
    let pool = LocalPool::new();
    let spawner = pool.spawner();
    drop(pool);
    let err = spawn_cancellable(&spawner, "orphan", async {}).unwrap_err();
    assert!(matches!(err, PageError::Spawn(msg) if msg.starts_with("orphan")));
}
