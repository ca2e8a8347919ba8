use std::env;

/// Expand environment variables in a string using ${VAR_NAME} syntax.
/// Unset variables are left as written.
pub fn expand_env_var_in_string(value: &str) -> String {
    let mut result = value.to_string();
    let re = match regex::Regex::new(r"\$\{([^}]+)\}") {
        Ok(re) => re,
        Err(_) => return result,
    };

    for cap in re.captures_iter(value) {
        let var_name = &cap[1];
        let replacement = env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name));
        result = result.replace(&cap[0], &replacement);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_set_variables() {
        env::set_var("CATAPI_TEST_EXPAND_SET", "k-123");
        assert_eq!(expand_env_var_in_string("${CATAPI_TEST_EXPAND_SET}"), "k-123");
        assert_eq!(
            expand_env_var_in_string("pre-${CATAPI_TEST_EXPAND_SET}-post"),
            "pre-k-123-post"
        );
    }

    #[test]
    fn leaves_unset_variables_untouched() {
        assert_eq!(
            expand_env_var_in_string("${CATAPI_TEST_EXPAND_NEVER_SET}"),
            "${CATAPI_TEST_EXPAND_NEVER_SET}"
        );
    }
}
