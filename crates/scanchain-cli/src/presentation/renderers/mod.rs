mod console;

pub use console::ConsolePassportRenderer;
