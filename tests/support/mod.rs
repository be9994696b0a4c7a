use std::convert::Infallible;

use paddle_shooter::entities::Rect;
use paddle_shooter::render::{Paint, Surface};

/// Everything a `Surface` was asked to do, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    Rect(Rect, Paint),
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        paint: Paint,
    },
    Present,
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

#[allow(dead_code)]
impl RecordingSurface {
    pub fn rects(&self, paint: Paint) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Rect(r, p) if *p == paint => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.calls.clear();
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), Infallible> {
        self.calls.push(Call::Rect(rect, paint));
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        paint: Paint,
    ) -> Result<(), Infallible> {
        self.calls.push(Call::Text {
            text: text.to_string(),
            x,
            y,
            size,
            paint,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.calls.push(Call::Present);
        Ok(())
    }
}
