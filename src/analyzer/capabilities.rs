/// What the host can do, probed once at startup.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub os_name: String,
    pub arch: String,
    pub cpu_cores: usize,
    /// A computer-vision backend is compiled in and answers
    pub vision_backend: bool,
}

impl Capabilities {
    pub fn detect() -> Self {
        Self {
            os_name: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_cores: num_cpus::get(),
            vision_backend: Self::detect_vision_backend(),
        }
    }

    #[cfg(feature = "vision")]
    fn detect_vision_backend() -> bool {
        match opencv::core::get_build_information() {
            Ok(info) => !info.trim().is_empty(),
            Err(e) => {
                crate::utils::logger::debug(&format!("OpenCV probe failed: {}", e));
                false
            }
        }
    }

    #[cfg(not(feature = "vision"))]
    fn detect_vision_backend() -> bool {
        false
    }

    pub fn summary(&self) -> String {
        format!(
            "os={} arch={} cores={} vision={}",
            self.os_name, self.arch, self.cpu_cores, self.vision_backend
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_reports_host() {
        let caps = Capabilities::detect();
        assert_eq!(caps.os_name, std::env::consts::OS);
        assert!(caps.cpu_cores >= 1);
        if !cfg!(feature = "vision") {
            assert!(!caps.vision_backend);
        }
    }

    #[test]
    fn test_summary_mentions_vision_flag() {
        let caps = Capabilities {
            os_name: "linux".to_string(),
            arch: "x86_64".to_string(),
            cpu_cores: 8,
            vision_backend: false,
        };
        assert_eq!(caps.summary(), "os=linux arch=x86_64 cores=8 vision=false");
    }
}
