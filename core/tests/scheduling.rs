use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use futures::FutureExt;
use slideshow_core::{ReadinessGate, TaskSlot};

struct CountedHandle {
    drops: Rc<Cell<u32>>,
}

impl Drop for CountedHandle {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn empty_gate_is_ready_immediately() {
    let gate = ReadinessGate::new(0);
    assert!(gate.is_ready());
    assert_eq!(gate.wait().now_or_never(), Some(()));
}

#[test]
fn gate_opens_after_every_member_signals() {
    let gate = ReadinessGate::new(3);
    assert!(gate.mark_ready(1));
    assert!(!gate.mark_ready(1));
    assert!(!gate.mark_ready(7));
    assert_eq!(gate.remaining(), 2);
    assert_eq!(gate.wait().now_or_never(), None);
    gate.mark_ready(0);
    gate.mark_ready(2);
    assert!(gate.is_ready());
    assert_eq!(gate.wait().now_or_never(), Some(()));
}

#[test]
fn gate_wakes_waiting_tasks_without_blocking_others() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let slow = ReadinessGate::new(2);
    let fast = ReadinessGate::new(1);
    let log = Rc::new(RefCell::new(Vec::new()));

    for (label, gate) in [("slow", slow.clone()), ("fast", fast.clone())] {
        let log = log.clone();
        spawner
            .spawn_local(async move {
                gate.wait().await;
                log.borrow_mut().push(label);
            })
            .expect("spawn");
    }

    pool.run_until_stalled();
    assert!(log.borrow().is_empty());

    fast.mark_ready(0);
    slow.mark_ready(0);
    pool.run_until_stalled();
    assert_eq!(*log.borrow(), vec!["fast"]);

    slow.mark_ready(1);
    pool.run_until_stalled();
    assert_eq!(*log.borrow(), vec!["fast", "slow"]);
}

#[test]
fn task_slot_cancels_previous_handle_before_starting() {
    let drops = Rc::new(Cell::new(0));
    let mut slot = TaskSlot::new();
    assert!(!slot.is_running());

    slot.start(|| CountedHandle {
        drops: drops.clone(),
    });
    assert!(slot.is_running());

    let seen_at_start = Rc::new(Cell::new(None));
    slot.start(|| {
        seen_at_start.set(Some(drops.get()));
        CountedHandle {
            drops: drops.clone(),
        }
    });
    assert_eq!(seen_at_start.get(), Some(1));
    assert_eq!(drops.get(), 1);

    assert!(slot.cancel());
    assert_eq!(drops.get(), 2);
    assert!(!slot.cancel());
    assert!(!slot.is_running());
}
