use wasm_bindgen::JsCast;
use web_sys as web;

/// A third-party `<script>` appended to `<body>`; removed again on drop.
pub struct ScriptEmbed {
    script: web::HtmlScriptElement,
}

impl ScriptEmbed {
    pub fn insert(document: &web::Document, src: &str) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;
        let script = document
            .create_element("script")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlScriptElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        script.set_src(src);
        script.set_type("text/javascript");
        body.append_child(&script)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        log::info!("[nav] embed inserted {}", src);
        Ok(Self { script })
    }
}

impl Drop for ScriptEmbed {
    fn drop(&mut self) {
        self.script.remove();
    }
}
