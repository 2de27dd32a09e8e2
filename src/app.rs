use log::info;

use crate::models::Screen;
use crate::widgets::{ColoredBox, DoubleHalf};

pub struct App {
    pub screen: Screen,
    colored_box: ColoredBox,
    double_half: DoubleHalf,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::ColoredBox,
            colored_box: ColoredBox::new(),
            double_half: DoubleHalf::new(),
        }
    }

    pub fn colored_box(&self) -> &ColoredBox {
        &self.colored_box
    }

    pub fn double_half(&self) -> &DoubleHalf {
        &self.double_half
    }

    pub fn switch_screen(&mut self) {
        self.screen = match self.screen {
            Screen::ColoredBox => Screen::DoubleHalf,
            Screen::DoubleHalf => Screen::ColoredBox,
        };
        info!("Switched to {:?}", self.screen);
    }

    pub fn next_color(&mut self) {
        self.colored_box.next_color();
    }

    pub fn double_value(&mut self) {
        self.double_half.double();
    }

    pub fn halve_value(&mut self) {
        self.double_half.halve();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_screen_keeps_widget_state() {
        let mut app = App::new();
        app.next_color();
        app.switch_screen();
        assert_eq!(app.screen, Screen::DoubleHalf);
        app.double_value();
        app.switch_screen();
        assert_eq!(app.screen, Screen::ColoredBox);
        assert_eq!(app.colored_box().color(), "blue");
        assert_eq!(app.double_half().value(), 20.0);
    }
}
