//! A single nucleon: transverse position plus participant state.

/// Nucleon owned by a nucleus ensemble.
///
/// Positions are written only by the owning nucleus when it samples; callers
/// read them back through iteration. The participant flag belongs to
/// downstream collision logic and is cleared on every resample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nucleon {
    x: f64,
    y: f64,
    participant: bool,
}

impl Nucleon {
    pub(crate) fn new() -> Self {
        Nucleon {
            x: 0.0,
            y: 0.0,
            participant: false,
        }
    }

    /// Transverse x [fm].
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Transverse y [fm].
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn is_participant(&self) -> bool {
        self.participant
    }

    pub(crate) fn mark_participant(&mut self) {
        self.participant = true;
    }

    pub(crate) fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.participant = false;
    }
}

/// Mutable view of one nucleon that can only touch the participant flag.
///
/// Yielded by [`Nucleus::iter_mut`](crate::Nucleus::iter_mut); positions stay
/// readable but there is no way to write them back through this handle.
#[derive(Debug)]
pub struct ParticipantMut<'a> {
    nucleon: &'a mut Nucleon,
}

impl<'a> ParticipantMut<'a> {
    pub(crate) fn new(nucleon: &'a mut Nucleon) -> Self {
        ParticipantMut { nucleon }
    }

    pub fn x(&self) -> f64 {
        self.nucleon.x
    }

    pub fn y(&self) -> f64 {
        self.nucleon.y
    }

    pub fn position(&self) -> (f64, f64) {
        self.nucleon.position()
    }

    pub fn is_participant(&self) -> bool {
        self.nucleon.participant
    }

    /// Mark as having taken part in a collision.
    pub fn mark(&mut self) {
        self.nucleon.mark_participant();
    }

    /// Read-only copy of the underlying nucleon.
    pub fn get(&self) -> Nucleon {
        *self.nucleon
    }
}

/// Iterator over [`ParticipantMut`] handles, in nucleus iteration order.
#[derive(Debug)]
pub struct ParticipantsMut<'a> {
    inner: std::slice::IterMut<'a, Nucleon>,
}

impl<'a> ParticipantsMut<'a> {
    pub(crate) fn new(nucleons: &'a mut [Nucleon]) -> Self {
        ParticipantsMut {
            inner: nucleons.iter_mut(),
        }
    }
}

impl<'a> Iterator for ParticipantsMut<'a> {
    type Item = ParticipantMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(ParticipantMut::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for ParticipantsMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(ParticipantMut::new)
    }
}

impl ExactSizeIterator for ParticipantsMut<'_> {}
