pub fn get_signature(version: &str) -> String {
    format!(
        r#"
  📦 cfpublish v{}
     Uploads packaged addon archives to CurseForge.
     Reads `curseProjectId` per addon from config.json.
"#,
        version
    )
}
