use crate::consts::COLUMNS_ENV_VAR;
use std::io::IsTerminal;

pub fn is_stdout_terminal() -> bool {
    std::io::stdout().is_terminal()
}

pub fn get_terminal_width() -> usize {
    static TERMINAL_WIDTH: std::sync::LazyLock<usize> = std::sync::LazyLock::new(|| {
        for var in [COLUMNS_ENV_VAR, "COLUMNS"] {
            if let Ok(w) = std::env::var(var).map(|s| s.parse().unwrap_or(0))
                && w > 0
            {
                return w;
            }
        }

        if is_stdout_terminal()
            && let Ok((w, _)) = crossterm::terminal::size()
        {
            return w as usize;
        }

        80
    });

    *TERMINAL_WIDTH
}
