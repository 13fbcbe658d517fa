// Shared fixture: a real git repository with the reference tag layout.
#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature, Tree};
use std::collections::HashMap;
use tempfile::TempDir;

/// Target (commit name or ref) and the version it must produce
pub const EXPECTED_VERSIONS: &[(&str, &str)] = &[
    ("c1", "1.0.0a00000001"),
    ("c3", "2.0.0a20220400"),
    ("c2", "2.0.0a20220100"),
    ("w.2022.1", "2.0.0a20220100"),
    ("c4", "2.0.0a20220401"),
    ("v2.1.0", "2.0.0a20220900"),
    ("w.2022.05", "2.0.0a20220600"),
    ("v3.0.0", "3.0.0a20220903"),
    ("c11", "4.0.0a20221001"),
    ("HEAD", "4.0.0a20221001"),
];

pub struct Fixture {
    pub dir: TempDir,
    pub commits: HashMap<&'static str, Oid>,
}

impl Fixture {
    /// Resolve a table entry to something git understands
    pub fn target(&self, name: &str) -> String {
        match self.commits.get(name) {
            Some(oid) => oid.to_string()[..10].to_string(),
            None => name.to_string(),
        }
    }
}

fn commit(repo: &Repository, tree: &Tree, sig: &Signature, message: &str, parents: &[Oid]) -> Oid {
    let parents: Vec<Commit> = parents
        .iter()
        .map(|oid| repo.find_commit(*oid).expect("Could not find parent"))
        .collect();
    let parent_refs: Vec<&Commit> = parents.iter().collect();
    repo.commit(None, sig, sig, message, tree, &parent_refs)
        .expect("Could not create commit")
}

fn annotated_tag(repo: &Repository, sig: &Signature, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("Could not find object");
    repo.tag(name, &object, sig, name, false)
        .expect("Could not create tag");
}

/// c0 <- c1 <- ... <- c11 on main, with a release branch b1 off c5
pub fn build_reference_repo() -> Fixture {
    let dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(dir.path()).expect("Could not init git repo");
    let mut commits = HashMap::new();

    {
        let sig = Signature::now("Test User", "test@example.com").expect("Could not get sig");
        let tree_id = repo
            .treebuilder(None)
            .and_then(|builder| builder.write())
            .expect("Could not write tree");
        let tree = repo.find_tree(tree_id).expect("Could not find tree");

        let mut previous: Vec<Oid> = Vec::new();
        for name in ["c0", "c1", "c2", "c3", "c4", "c5"] {
            let oid = commit(&repo, &tree, &sig, name, &previous);
            commits.insert(name, oid);
            previous = vec![oid];
        }
        let b1 = commit(&repo, &tree, &sig, "b1", &[commits["c5"]]);
        commits.insert("b1", b1);
        for name in ["c6", "c7", "c8", "c9", "c10", "c11"] {
            let oid = commit(&repo, &tree, &sig, name, &previous);
            commits.insert(name, oid);
            previous = vec![oid];
        }

        annotated_tag(&repo, &sig, "v1.0.0", commits["c1"]);
        annotated_tag(&repo, &sig, "v2.0.0", commits["b1"]);
        annotated_tag(&repo, &sig, "v2.1.0", commits["c6"]);
        annotated_tag(&repo, &sig, "v3.0.0", commits["c9"]);
        annotated_tag(&repo, &sig, "w.2022.1", commits["c2"]);
        annotated_tag(&repo, &sig, "w.2022.04", commits["c3"]);
        annotated_tag(&repo, &sig, "w.2022.05", commits["c5"]);
        annotated_tag(&repo, &sig, "w.2022.06", commits["c5"]);
        annotated_tag(&repo, &sig, "w.2022.09", commits["c6"]);
        annotated_tag(&repo, &sig, "w.2022.10", commits["c10"]);

        let c10 = repo
            .find_object(commits["c10"], None)
            .expect("Could not find object");
        repo.tag_lightweight("v5.0.0", &c10, false)
            .expect("Could not create tag");

        repo.reference("refs/heads/main", commits["c11"], true, "fixture")
            .expect("Could not create branch");
        repo.set_head("refs/heads/main")
            .expect("Could not set HEAD");
    }

    Fixture { dir, commits }
}
