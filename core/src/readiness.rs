use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

struct GateState {
    ready: Vec<bool>,
    remaining: usize,
    wakers: Vec<Waker>,
}

#[derive(Clone)]
pub struct ReadinessGate {
    state: Rc<RefCell<GateState>>,
}

impl ReadinessGate {
    pub fn new(members: usize) -> Self {
        Self {
            state: Rc::new(RefCell::new(GateState {
                ready: vec![false; members],
                remaining: members,
                wakers: Vec::new(),
            })),
        }
    }

    pub fn members(&self) -> usize {
        self.state.borrow().ready.len()
    }

    pub fn remaining(&self) -> usize {
        self.state.borrow().remaining
    }

    pub fn is_ready(&self) -> bool {
        self.remaining() == 0
    }

    pub fn mark_ready(&self, index: usize) -> bool {
        let wakers = {
            let mut state = self.state.borrow_mut();
            match state.ready.get_mut(index) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
            state.remaining -= 1;
            if state.remaining > 0 {
                return true;
            }
            std::mem::take(&mut state.wakers)
        };
        for waker in wakers {
            waker.wake();
        }
        true
    }

    pub fn wait(&self) -> ReadyFuture {
        ReadyFuture {
            gate: self.clone(),
        }
    }
}

impl std::fmt::Debug for ReadinessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ReadinessGate")
            .field("members", &state.ready.len())
            .field("remaining", &state.remaining)
            .finish()
    }
}

#[derive(Debug)]
pub struct ReadyFuture {
    gate: ReadinessGate,
}

impl Future for ReadyFuture {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut state = self.gate.state.borrow_mut();
        if state.remaining == 0 {
            return Poll::Ready(());
        }
        if !state.wakers.iter().any(|waker| waker.will_wake(cx.waker())) {
            state.wakers.push(cx.waker().clone());
        }
        Poll::Pending
    }
}
