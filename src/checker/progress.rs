// src/checker/progress.rs
// =============================================================================
// A text progress bar for the link check:
//
//   Progress: |█████████████-------------------------------------| 26.0% Complete
//
// The completion counter is an AtomicUsize so concurrent checks can bump it
// through a shared reference (&Progress) without a lock. The bar may be
// drawn slightly out of order when two checks finish at once; that's fine.
// =============================================================================

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

const BAR_WIDTH: usize = 50;

pub struct Progress {
    total: usize,
    done: AtomicUsize,
    visible: bool,
}

impl Progress {
    pub fn new(total: usize, visible: bool) -> Self {
        Progress {
            total,
            done: AtomicUsize::new(0),
            visible,
        }
    }

    /// Draws the empty bar before any check has finished
    pub fn start(&self) {
        self.draw(0);
    }

    /// Records one finished check and redraws the bar
    pub fn tick(&self) -> usize {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        self.draw(done);
        done
    }

    fn draw(&self, done: usize) {
        if !self.visible {
            return;
        }
        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "\r{}", render(done, self.total));
        if done >= self.total {
            let _ = writeln!(stdout);
        }
        let _ = stdout.flush();
    }
}

fn render(done: usize, total: usize) -> String {
    // An empty batch is complete from the start
    let fraction = if total == 0 {
        1.0
    } else {
        done.min(total) as f64 / total as f64
    };
    let filled = (BAR_WIDTH as f64 * fraction) as usize;
    format!(
        "Progress: |{}{}| {:.1}% Complete",
        "█".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        fraction * 100.0
    )
}
