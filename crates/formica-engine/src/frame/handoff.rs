use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};
use std::time::Duration;

use crate::camera::CameraSnapshot;
use crate::stroke::StrokeBatch;

/// Everything a consumer needs to draw one settled frame.
#[derive(Debug, Clone, Default)]
pub struct FramePacket {
    pub frame_index: u64,
    pub camera: CameraSnapshot,
    pub batches: Vec<StrokeBatch>,
}

/// Result of [`FrameSender::publish`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PublishStatus {
    Sent,
    /// Queue full; the packet was discarded.
    Dropped,
    /// The receiver is gone.
    Disconnected,
}

/// Creates a bounded single-producer/single-consumer frame queue.
///
/// Neither end is `Clone`. A capacity of zero is raised to one so publishing
/// never needs a rendezvous.
pub fn channel(capacity: usize) -> (FrameSender, FrameReceiver) {
    let (tx, rx) = mpsc::sync_channel(capacity.max(1));
    (
        FrameSender { tx, dropped: 0, disconnected: false },
        FrameReceiver { rx },
    )
}

/// Producing end, owned by the frame loop.
#[derive(Debug)]
pub struct FrameSender {
    tx: SyncSender<FramePacket>,
    dropped: u64,
    disconnected: bool,
}

impl FrameSender {
    /// Queues `packet` without blocking.
    pub fn publish(&mut self, packet: FramePacket) -> PublishStatus {
        match self.tx.try_send(packet) {
            Ok(()) => PublishStatus::Sent,
            Err(TrySendError::Full(packet)) => {
                self.dropped += 1;
                log::trace!(
                    "consumer behind, dropped frame {} ({} total)",
                    packet.frame_index,
                    self.dropped
                );
                PublishStatus::Dropped
            }
            Err(TrySendError::Disconnected(_)) => {
                if !self.disconnected {
                    self.disconnected = true;
                    log::debug!("frame consumer disconnected");
                }
                PublishStatus::Disconnected
            }
        }
    }

    /// Packets discarded because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

/// Consuming end; may live on another thread.
#[derive(Debug)]
pub struct FrameReceiver {
    rx: Receiver<FramePacket>,
}

impl FrameReceiver {
    /// Next queued packet, if any.
    pub fn try_next(&self) -> Option<FramePacket> {
        self.rx.try_recv().ok()
    }

    /// Drains the queue and returns the newest packet.
    pub fn latest(&self) -> Option<FramePacket> {
        let mut newest = None;
        loop {
            match self.rx.try_recv() {
                Ok(packet) => newest = Some(packet),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return newest,
            }
        }
    }

    /// Waits up to `timeout` for the next packet. `None` on timeout or once the
    /// sender is gone and the queue is empty.
    pub fn next_timeout(&self, timeout: Duration) -> Option<FramePacket> {
        self.rx.recv_timeout(timeout).ok()
    }
}

impl Iterator for FrameReceiver {
    type Item = FramePacket;

    /// Blocks until the next packet; ends when the sender is dropped.
    fn next(&mut self) -> Option<FramePacket> {
        self.rx.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet(frame_index: u64) -> FramePacket {
        FramePacket { frame_index, ..FramePacket::default() }
    }

    #[test]
    fn full_queue_drops_instead_of_blocking() {
        let (mut tx, rx) = channel(2);
        assert_eq!(tx.publish(packet(0)), PublishStatus::Sent);
        assert_eq!(tx.publish(packet(1)), PublishStatus::Sent);
        assert_eq!(tx.publish(packet(2)), PublishStatus::Dropped);
        assert_eq!(tx.dropped(), 1);

        assert_eq!(rx.try_next().map(|p| p.frame_index), Some(0));
        assert_eq!(tx.publish(packet(3)), PublishStatus::Sent);
    }

    #[test]
    fn latest_skips_stale_packets() {
        let (mut tx, rx) = channel(4);
        for i in 0..3 {
            tx.publish(packet(i));
        }
        assert_eq!(rx.latest().map(|p| p.frame_index), Some(2));
        assert!(rx.latest().is_none());
    }

    #[test]
    fn zero_capacity_still_buffers_one() {
        let (mut tx, rx) = channel(0);
        assert_eq!(tx.publish(packet(7)), PublishStatus::Sent);
        assert_eq!(rx.try_next().map(|p| p.frame_index), Some(7));
    }

    #[test]
    fn timed_wait_returns_queued_packet_or_gives_up() {
        let (mut tx, rx) = channel(1);
        assert!(rx.next_timeout(Duration::from_millis(5)).is_none());

        tx.publish(packet(3));
        assert_eq!(rx.next_timeout(Duration::from_millis(5)).map(|p| p.frame_index), Some(3));

        drop(tx);
        assert!(rx.next_timeout(Duration::from_secs(5)).is_none());
    }

    #[test]
    fn dropped_receiver_reports_disconnect() {
        let (mut tx, rx) = channel(1);
        drop(rx);
        assert_eq!(tx.publish(packet(0)), PublishStatus::Disconnected);
        assert_eq!(tx.publish(packet(1)), PublishStatus::Disconnected);
    }

    #[test]
    fn receiver_iterates_until_sender_drops() {
        let (mut tx, rx) = channel(8);
        let consumer = std::thread::spawn(move || rx.map(|p| p.frame_index).collect::<Vec<_>>());

        for i in 0..5 {
            tx.publish(packet(i));
        }
        drop(tx);

        let seen = consumer.join().unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }
}
