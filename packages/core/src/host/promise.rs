//! Асинхронный результат точки входа.
//!
//! `Resolver` и `Promise` - две половины `tokio::sync::oneshot`. `resolve` и
//! `reject` поглощают `Resolver`, поэтому промис завершается ровно один раз.
//! Если `Resolver` уничтожен без результата, промис отклоняется.

use super::value::HostValue;
use crate::error::{ErrorKind, HostError};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

pub type Settled = Result<HostValue, HostError>;

pub fn pending() -> (Resolver, Promise) {
    let (tx, rx) = oneshot::channel();
    (Resolver { tx }, Promise { rx })
}

#[derive(Debug)]
pub struct Resolver {
    tx: oneshot::Sender<Settled>,
}

impl Resolver {
    pub fn resolve(self, value: HostValue) {
        self.settle(Ok(value));
    }

    pub fn reject(self, error: HostError) {
        self.settle(Err(error));
    }

    pub fn settle(self, result: Settled) {
        if self.tx.send(result).is_err() {
            tracing::debug!("promise dropped by host before it settled");
        }
    }
}

#[derive(Debug)]
pub struct Promise {
    rx: oneshot::Receiver<Settled>,
}

impl Promise {
    /// Результат, если промис уже завершён. Забирает его.
    pub fn try_take(&mut self) -> Option<Settled> {
        match self.rx.try_recv() {
            Ok(settled) => Some(settled),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(abandoned())),
        }
    }
}

impl Future for Promise {
    type Output = Settled;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.unwrap_or_else(|_| Err(abandoned())))
    }
}

fn abandoned() -> HostError {
    tracing::error!("asynchronous entry point finished without settling its promise");
    HostError::new(ErrorKind::Internal, "promise abandoned without a result")
}
