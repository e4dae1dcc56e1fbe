use serde::{Deserialize, Serialize};

/// Rate-limit bookkeeping mirrored to local storage as
/// `{"lastSubmission": <ms>, "count": <n>}`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionRecord {
    #[serde(rename = "lastSubmission", default)]
    pub last_submission: Option<i64>,
    #[serde(default)]
    pub count: u32,
}

impl SubmissionRecord {
    /// Resets the counter if the window has elapsed, then tells whether one
    /// more submission fits. Returns the remaining wait when it doesn't.
    pub fn admit(&mut self, now: i64, window_ms: i64, max_submissions: u32) -> Result<(), i64> {
        let elapsed = match self.last_submission {
            // A clock that went backwards still counts as inside the window.
            Some(last) => now.saturating_sub(last),
            None => {
                self.count = 0;
                return Ok(());
            }
        };

        if elapsed >= window_ms {
            self.count = 0;
            return Ok(());
        }

        if self.count >= max_submissions {
            return Err((window_ms - elapsed).max(0));
        }
        Ok(())
    }

    pub fn register(&mut self, now: i64) {
        self.last_submission = Some(now);
        self.count = self.count.saturating_add(1);
    }
}
