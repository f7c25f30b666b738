/// Answers given during the current session. Not persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub answered: u32,
    pub correct: u32,
}

impl SessionTally {
    pub fn record(&mut self, was_correct: bool) {
        self.answered += 1;
        if was_correct {
            self.correct += 1;
        }
    }

    pub fn incorrect(&self) -> u32 {
        self.answered - self.correct
    }

    pub fn accuracy(&self) -> f32 {
        if self.answered == 0 {
            0.0
        } else {
            self.correct as f32 / self.answered as f32
        }
    }
}
