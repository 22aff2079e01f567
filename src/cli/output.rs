//! Descriptor rendering.

use super::args::OutputFormat;
use crate::error::Result;
use crate::variant::BuildDescriptor;
use std::io::Write;

/// Writes `descriptors` to `out` in the requested format.
///
/// JSON output is a single object for one descriptor and an array otherwise.
pub fn render(descriptors: &[BuildDescriptor], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            match descriptors {
                [single] => serde_json::to_writer_pretty(&mut *out, single)?,
                many => serde_json::to_writer_pretty(&mut *out, many)?,
            }
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (index, descriptor) in descriptors.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                render_text(descriptor, out)?;
            }
        }
    }
    Ok(())
}

fn render_text(d: &BuildDescriptor, out: &mut impl Write) -> Result<()> {
    let none = || "(none)".to_string();

    writeln!(out, "{}", d.variant_name)?;
    writeln!(out, "  application id    {}", d.application_id)?;
    writeln!(out, "  display name      {}", d.display_name)?;
    writeln!(
        out,
        "  version name      {}",
        d.version_name.clone().unwrap_or_else(none)
    )?;
    writeln!(
        out,
        "  version suffix    {}",
        d.version_suffix.clone().unwrap_or_else(none)
    )?;
    writeln!(out, "  debuggable        {}", d.debuggable)?;
    writeln!(out, "  minify            {}", d.minify)?;
    writeln!(out, "  shrink resources  {}", d.shrink_resources)?;
    writeln!(
        out,
        "  proguard rules    {}",
        if d.proguard_rule_files.is_empty() {
            none()
        } else {
            d.proguard_rule_files.join(", ")
        }
    )?;
    writeln!(
        out,
        "  signing           {} @ {} ({:?})",
        d.signing.alias,
        d.signing.store_file.display(),
        d.signing.origin
    )?;
    writeln!(out, "  packaging excludes")?;
    for rule in &d.packaging_excludes {
        writeln!(out, "    {}", rule.pattern())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{CompositorBuilder, credentials};
    use std::path::Path;

    fn descriptors() -> Vec<BuildDescriptor> {
        let compositor = CompositorBuilder::new()
            .debug_keystore("/home/dev/.android/debug.keystore")
            .build()
            .unwrap();
        vec![
            compositor.compose("dev", "debug", None).unwrap(),
            compositor.compose("prod", "release", None).unwrap(),
        ]
    }

    #[test]
    fn text_summarizes_variants() {
        let mut out = Vec::new();
        render(&descriptors(), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("devDebug"));
        assert!(text.contains("prodRelease"));
        assert!(text.contains("androiddebugkey @ /home/dev/.android/debug.keystore (DefaultDebug)"));
        assert!(text.contains("    META-INF/LICENSE\n"));
    }

    #[test]
    fn text_hides_release_passwords() {
        let creds = credentials::parse(
            "keyAlias=relkey\nkeyPassword=s3cretKey\nstoreFile=/keys/rel.jks\nstorePassword=s3cretStore\n",
            Path::new("key.properties"),
        )
        .unwrap();
        let descriptor = CompositorBuilder::new()
            .debug_keystore("/home/dev/.android/debug.keystore")
            .build()
            .unwrap()
            .compose("staging", "release", Some(&creds))
            .unwrap();

        let mut out = Vec::new();
        render(&[descriptor], OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("relkey @ /keys/rel.jks (ExternalFile)"));
        assert!(!text.contains("s3cretKey"));
        assert!(!text.contains("s3cretStore"));
    }

    #[test]
    fn json_single_is_object_and_many_is_array() {
        let all = descriptors();

        let mut out = Vec::new();
        render(&all[..1], OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["application_id"], "com.udharoo.dev");
        assert_eq!(value["signing"]["origin"], "DefaultDebug");

        let mut out = Vec::new();
        render(&all, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }
}
