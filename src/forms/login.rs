use serde::{Deserialize, Serialize};

/// Body of `POST /login`. Missing members decode as empty strings.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    #[serde(alias = "userName", alias = "UserName")]
    pub username: String,
    #[serde(alias = "Password")]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenView {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_aliases() {
        let form: LoginForm =
            serde_json::from_str(r#"{"userName":"filipe","password":"123456"}"#).unwrap();
        assert_eq!(form.username, "filipe");
        assert_eq!(form.password, "123456");

        let form: LoginForm =
            serde_json::from_str(r#"{"username":"filipe","password":"123456"}"#).unwrap();
        assert_eq!(form.username, "filipe");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let form: LoginForm = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(form, LoginForm::default());
    }

    #[test]
    fn test_debug_hides_password() {
        let form = LoginForm {
            username: "filipe".to_string(),
            password: "123456".to_string(),
        };
        assert!(!format!("{:?}", form).contains("123456"));
    }
}
