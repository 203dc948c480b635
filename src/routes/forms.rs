use axum::extract::{Form, rejection::FormRejection};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListForm {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemForm {
    pub description: Option<String>,
}

/// An unreadable or missing form body counts as a form with no fields.
pub fn submitted<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(%rejection, "form body rejected");
            T::default()
        }
    }
}
