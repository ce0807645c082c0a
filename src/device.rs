use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DEVICE: &str = "/dev/video0";

/// Turns a `--device` argument into a node path.
///
/// A bare number `N` means `/dev/videoN`; anything else is used as given.
pub fn resolve_device_path(arg: &str) -> PathBuf {
    if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
        PathBuf::from(format!("/dev/video{}", arg))
    } else {
        PathBuf::from(arg)
    }
}

/// A video4linux node found on the system.
#[derive(Debug, Clone, Serialize)]
pub struct VideoNode {
    pub devnode: PathBuf,
    pub name: Option<String>,
    pub driver: Option<String>, // Some("bttv") or None
    pub attributes: HashMap<String, String>, // Extra optional info
}

fn node_index(path: &Path) -> u32 {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|s| s.strip_prefix("video"))
        .and_then(|x| x.parse::<u32>().ok())
        .unwrap_or(u32::MAX)
}

/// Lists video4linux nodes, sorted as video0, video1, .. video10, ..
///
/// udev is asked first; when it is unavailable `/dev/video*` is scanned.
pub fn discover_video_devices() -> Result<Vec<VideoNode>> {
    let mut nodes = match discover_udev() {
        Ok(nodes) => nodes,
        Err(e) => {
            debug!(error = %e, "udev enumeration failed, scanning /dev");
            discover_dev()?
        }
    };
    nodes.sort_by_key(|n| node_index(&n.devnode));
    Ok(nodes)
}

fn discover_udev() -> Result<Vec<VideoNode>> {
    let mut enumerator = udev::Enumerator::new()?;
    enumerator.match_subsystem("video4linux")?;

    let mut nodes = Vec::new();
    for device in enumerator.scan_devices()? {
        let Some(devnode) = device.devnode() else {
            continue;
        };
        let name = device
            .attribute_value("name")
            .map(|v| v.to_string_lossy().trim().to_string());
        // The node itself has no driver; the bridge it hangs off does.
        let driver = device
            .parent()
            .and_then(|p| p.driver().map(|d| d.to_string_lossy().to_string()));

        let mut attributes = HashMap::new();
        for key in ["index", "dev_debug"] {
            if let Some(v) = device.attribute_value(key) {
                attributes.insert(key.to_string(), v.to_string_lossy().trim().to_string());
            }
        }

        nodes.push(VideoNode {
            devnode: devnode.to_path_buf(),
            name,
            driver,
            attributes,
        });
    }
    Ok(nodes)
}

fn discover_dev() -> Result<Vec<VideoNode>> {
    let mut nodes = Vec::new();
    for entry in fs::read_dir("/dev")? {
        let entry = entry?;
        let path = entry.path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        if name.starts_with("video") {
            let sysfs_name = format!("/sys/class/video4linux/{}/name", name);
            nodes.push(VideoNode {
                name: fs::read_to_string(sysfs_name).ok().map(|s| s.trim().to_string()),
                devnode: path,
                driver: None,
                attributes: HashMap::new(),
            });
        }
    }
    Ok(nodes)
}
