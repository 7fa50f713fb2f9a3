//! Configuration report
//!
//! Human-readable dump of a parsed [`Config`].

use std::fmt;

use crate::model::{Config, LocationConfig, ServerConfig};

/// Display adapter that renders every server and location of a config
pub struct Report<'a>(pub &'a Config);

fn or_none(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========================================")?;
        writeln!(f, "Servers: {}", self.0.len())?;
        writeln!(f, "========================================")?;
        for (idx, server) in self.0.iter().enumerate() {
            write_server(f, idx + 1, server)?;
            writeln!(f, "----------------------------------------")?;
        }
        Ok(())
    }
}

fn write_server(f: &mut fmt::Formatter<'_>, ordinal: usize, server: &ServerConfig) -> fmt::Result {
    writeln!(f, "SERVER [{}]", ordinal)?;
    writeln!(
        f,
        "  Listen:        {}",
        server.listen_addr().as_deref().unwrap_or("(unset)")
    )?;
    writeln!(f, "  Server name:   {}", or_none(&server.server_name))?;
    writeln!(f, "  Root:          {}", server.root)?;
    writeln!(f, "  Index:         {}", server.index)?;
    writeln!(f, "  Max body size: {} bytes", server.client_max_body_size)?;

    writeln!(f, "  Error pages:")?;
    if server.error_pages.is_empty() {
        writeln!(f, "    (none)")?;
    }
    for (code, path) in &server.error_pages {
        writeln!(f, "    {} -> {}", code, path)?;
    }

    writeln!(f, "  Locations:")?;
    if server.locations.is_empty() {
        writeln!(f, "    (none)")?;
    }
    for location in &server.locations {
        write_location(f, location)?;
    }
    Ok(())
}

fn write_location(f: &mut fmt::Formatter<'_>, location: &LocationConfig) -> fmt::Result {
    let methods: Vec<&str> = location.allowed_methods.iter().map(|m| m.as_str()).collect();
    writeln!(f, "    - Path:      {}", location.path)?;
    writeln!(f, "      Methods:   {}", or_none(&methods.join(" ")))?;
    writeln!(f, "      Root:      {}", location.root)?;
    writeln!(f, "      Index:     {}", location.index)?;
    writeln!(
        f,
        "      Autoindex: {}",
        if location.autoindex { "on" } else { "off" }
    )?;
    writeln!(f, "      CGI path:  {}", or_none(&location.cgi_path))?;
    writeln!(f, "      Redirect:  {}", or_none(&location.redirect))
}
