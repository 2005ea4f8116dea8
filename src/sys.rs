//! Facts about the environment the process runs in.

use alloc::string::String;

/// Variables whose mere presence marks a CI provider.
const PROVIDER_VARIABLES: &[&str] = &[
    "CI_NAME",
    "GITHUB_ACTION",
    "GITLAB_CI",
    "NETLIFY",
    "TRAVIS",
    "CODEBUILD_SRC_DIR",
    "BUILDER_OUTPUT",
    "GITLAB_DEPLOYMENT",
    "NOW_GITHUB_DEPLOYMENT",
    "NOW_BUILDER",
    "BITBUCKET_DEPLOYMENT",
    "GERRIT_PROJECT",
    "SYSTEM_TEAMFOUNDATIONCOLLECTIONURI",
    "BITRISE_IO",
    "BUDDY_WORKSPACE_ID",
    "BUILDKITE",
    "CIRRUS_CI",
    "APPVEYOR",
    "CIRCLECI",
    "SEMAPHORE",
    "DRONE",
    "DSARI",
    "TDDIUM",
    "STRIDER",
    "TASKCLUSTER_ROOT_URL",
    "JENKINS_URL",
    "bamboo.buildKey",
    "GO_PIPELINE_NAME",
    "HUDSON_URL",
    "MAGNUM",
    "NEVERCODE",
    "RENDER",
    "SAIL_CI",
    "SHIPPABLE",
];

/// Returns `true` if the process appears to run under a continuous
/// integration service.
///
/// ```
/// // The answer depends on where the doctest runs; it must not panic.
/// let _ = violet::sys::is_ci();
/// ```
pub fn is_ci() -> bool {
    is_ci_with(&|name: &str| std::env::var(name).ok())
}

/// Like [`is_ci`], reading variables through `env`.
pub fn is_ci_with(env: &impl Fn(&str) -> Option<String>) -> bool {
    if env("CI").is_some_and(|value| matches!(value.as_str(), "true" | "1" | "woodpecker")) {
        return true;
    }

    // Heroku sets no dedicated variable.
    if env("NODE").is_some_and(|node| node.ends_with("/.heroku/node/bin/node")) {
        return true;
    }

    PROVIDER_VARIABLES.iter().any(|name| env(name).is_some())
}

#[cfg(test)]
mod tests {
    use alloc::borrow::ToOwned;

    use super::*;

    fn only(name: &'static str, value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key| (key == name).then(|| value.to_owned())
    }

    #[test]
    fn test_ci_variable() {
        assert!(is_ci_with(&only("CI", "true")));
        assert!(is_ci_with(&only("CI", "1")));
        assert!(is_ci_with(&only("CI", "woodpecker")));
        assert!(!is_ci_with(&only("CI", "false")));
    }

    #[test]
    fn test_providers() {
        assert!(is_ci_with(&only("GITHUB_ACTION", "")));
        assert!(is_ci_with(&only("bamboo.buildKey", "KEY")));
        assert!(is_ci_with(&only("NODE", "/app/.heroku/node/bin/node")));
        assert!(!is_ci_with(&only("NODE", "/usr/bin/node")));
        assert!(!is_ci_with(&|_: &str| None));
    }
}
