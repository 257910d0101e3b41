// Boundary I/O for the binaries. The engine itself never touches files.

use {
    crate::data::{ScanRequest, ScanResponse},
    anyhow::{Context, Result},
    std::fs::File,
    std::io::{self, BufReader, Read},
};

/// Read a request from a JSON file, or stdin when `source` is `-`.
pub fn load_request(source: &str) -> Result<ScanRequest> {
    if source == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read request from stdin")?;
        return parse_request(&raw);
    }

    let file = File::open(source).with_context(|| format!("Failed to open request file {}", source))?;
    let reader = BufReader::new(file);
    let request = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse request file {}", source))?;
    Ok(request)
}

pub fn parse_request(raw: &str) -> Result<ScanRequest> {
    serde_json::from_str(raw).context("Failed to parse request JSON")
}

pub fn render_response(response: &ScanResponse, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    Ok(out)
}
