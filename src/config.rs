//! Server Configuration
//!
//! Command-line flags, each with an environment variable fallback.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::view::Viewer;

/// todo-web - in-memory todo list served over HTTP
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-web")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "TODO_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: SocketAddr,

    /// Directory served under /static
    #[arg(long, env = "TODO_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Directory for rotated log files
    #[arg(long, env = "TODO_LOG_DIR", default_value = "./logs")]
    pub log_dir: PathBuf,

    /// Name shown as the logged-in user; omit to render the logged-out view
    #[arg(long, env = "TODO_DISPLAY_NAME")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
    pub log_dir: PathBuf,
    pub viewer: Viewer,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            addr: args.addr,
            static_dir: args.static_dir,
            log_dir: args.log_dir,
            viewer: Viewer::new(args.display_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    fn default_of(id: &str) -> Option<String> {
        Args::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_default_values().first())
            .map(|value| value.to_string_lossy().into_owned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_of("addr").as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(default_of("static_dir").as_deref(), Some("./static"));
        assert_eq!(default_of("log_dir").as_deref(), Some("./logs"));
        assert_eq!(default_of("display_name"), None);
    }

    #[test]
    fn test_defaults_parse() {
        let addr = default_of("addr").unwrap().parse::<SocketAddr>().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "todo-web",
            "--addr",
            "127.0.0.1:3000",
            "--static-dir",
            "/srv/static",
            "--log-dir",
            "/var/log/todo",
            "--display-name",
            "alice",
        ])
        .unwrap();
        let config = ServerConfig::from(args);
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/todo"));
        assert_eq!(config.viewer.display_name(), Some("alice"));
    }
}
