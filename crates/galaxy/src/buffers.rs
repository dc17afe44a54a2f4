//! Ping-pong position storage for Verlet integration.

use nalgebra::Point3;

/// Two fixed-length position buffers and a flag naming the current one
///
/// Swapping roles flips the flag; buffer contents never move.
#[derive(Debug, Clone)]
pub struct PositionBuffers {
    buffers: [Vec<Point3<f64>>; 2],
    /// `false`: buffer 0 is current, `true`: buffer 1 is current
    flipped: bool,
}

impl PositionBuffers {
    /// Both buffers filled with the origin
    pub fn new(len: usize) -> Self {
        Self {
            buffers: [vec![Point3::origin(); len], vec![Point3::origin(); len]],
            flipped: false,
        }
    }

    pub fn len(&self) -> usize {
        self.buffers[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the second buffer currently holds the current positions
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    fn current_index(&self) -> usize {
        usize::from(self.flipped)
    }

    pub fn current(&self) -> &[Point3<f64>] {
        &self.buffers[self.current_index()]
    }

    pub fn previous(&self) -> &[Point3<f64>] {
        &self.buffers[1 - self.current_index()]
    }

    /// Current buffer for reading and previous buffer for writing
    pub fn split_mut(&mut self) -> (&[Point3<f64>], &mut [Point3<f64>]) {
        let (current, previous) = self.both_mut();
        (&*current, previous)
    }

    /// Both buffers writable, current first; used to overwrite a whole population
    pub fn both_mut(&mut self) -> (&mut [Point3<f64>], &mut [Point3<f64>]) {
        let [first, second] = &mut self.buffers;
        let (current, previous) = if self.flipped {
            (second, first)
        } else {
            (first, second)
        };
        (current.as_mut_slice(), previous.as_mut_slice())
    }

    /// Exchange the roles of the two buffers
    pub fn swap(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Make buffer 0 current again without touching contents
    pub fn reset_roles(&mut self) {
        self.flipped = false;
    }
}
