use ascii_fractal::{AsciiController, MandelbrotConfig, StdoutPresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let presenter = StdoutPresenter::new();
    let mut controller = AsciiController::new(presenter, MandelbrotConfig::default());

    controller.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_succeeds() {
        let mut controller =
            AsciiController::new(StdoutPresenter::new(), MandelbrotConfig::default());

        assert!(controller.generate().is_ok());
        assert!(controller.buffer().is_some());
    }
}
