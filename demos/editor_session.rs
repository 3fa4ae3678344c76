//! Walks through what an editor front end does with the editing model:
//! click to add anchors, drag a handle, delete an anchor, change the segment count,
//! roll a random preset.
//! Run with `RUST_LOG=debug` to see the editing log.

use casteljau::editor::{AnchorChain, Canvas};
use casteljau::{Handle, Point2, SampleCount};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut chain = AnchorChain::new(Canvas::default());
    let a = chain.push(Point2::new(100.0, 400.0))?;
    let b = chain.push(Point2::new(250.0, 100.0))?;
    let c = chain.push(Point2::new(400.0, 400.0))?;

    // pull the handles of the middle anchor apart for a smooth joint
    chain.move_handle(b, Handle::Left, Point2::new(150.0, 100.0))?;
    chain.move_handle(b, Handle::Right, Point2::new(350.0, 100.0))?;
    // dragging past the canvas edge stops at the edge
    let applied = chain.move_handle(a, Handle::Right, Point2::new(100.0, 900.0))?;
    println!("handle clamped to {:?}", applied);

    // the number field hands over text, invalid input is rejected instead of guessed
    for input in ["8", "0", "two"] {
        match input.parse::<SampleCount>() {
            Ok(segments) => println!("{} segments -> {} points", segments, chain.sample(segments)?.len()),
            Err(e) => println!("ignoring {:?}: {}", input, e),
        }
    }

    chain.remove(c)?;
    let polyline = chain.sample(SampleCount::default())?;
    println!("after removing {}: {} points, ends at {:?}", c, polyline.len(), polyline.last());

    chain.load_random(&mut rand::thread_rng())?;
    println!("random preset: {} anchors", chain.len());

    Ok(())
}
