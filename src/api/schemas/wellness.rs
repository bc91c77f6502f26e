use serde::Serialize;

#[derive(Serialize)]
pub struct PromptBody {
    pub prompt: &'static str,
}

#[derive(Serialize, Clone, Copy)]
pub struct TechniqueBody {
    pub name: &'static str,
    pub instructions: &'static str,
    pub duration: &'static str,
}

#[derive(Serialize)]
pub struct TechniquesBody {
    pub techniques: Vec<TechniqueBody>,
}
