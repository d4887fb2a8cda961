//
//  azure-devops-rest
//  api/git/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::models::*;
use super::operations::{GitAsyncRefOperationParameters, GitCherryPick, GitMerge, GitMergeParameters, GitRevert};
use super::options::*;
use super::pull_requests::*;
use crate::api::client::{RestClientBase, ServiceClient};
use crate::api::common::{ApiError, IdentityRef, JsonPatchDocument, PagedList, PropertiesCollection};
use crate::api::request::{RestRequest, OCTET_STREAM_MEDIA_TYPE, TEXT_MEDIA_TYPE, ZIP_MEDIA_TYPE};

const REPOSITORIES: &str = "{project}/_apis/git/Repositories/{repositoryId}";
const ITEMS: &str = "{project}/_apis/git/repositories/{repositoryId}/Items/{*path}";
const ITEMS_LIST: &str = "{project}/_apis/git/repositories/{repositoryId}/Items";
const REFS: &str = "{project}/_apis/git/repositories/{repositoryId}/refs/{*filter}";
const BRANCH_STATS: &str = "{project}/_apis/git/repositories/{repositoryId}/stats/branches";
const COMMITS: &str = "{project}/_apis/git/repositories/{repositoryId}/commits/{commitId}";
const COMMIT_CHANGES: &str =
    "{project}/_apis/git/repositories/{repositoryId}/commits/{commitId}/changes";
const COMMIT_STATUSES: &str =
    "{project}/_apis/git/repositories/{repositoryId}/commits/{commitId}/statuses";
const PUSHES: &str = "{project}/_apis/git/repositories/{repositoryId}/pushes/{pushId}";
const BLOBS: &str = "{project}/_apis/git/repositories/{repositoryId}/blobs/{sha1}";
const ANNOTATED_TAGS: &str =
    "{project}/_apis/git/repositories/{repositoryId}/annotatedtags/{objectId}";
const PULL_REQUESTS: &str =
    "{project}/_apis/git/repositories/{repositoryId}/pullrequests/{pullRequestId}";
const PROJECT_PULL_REQUESTS: &str = "{project}/_apis/git/pullrequests/{pullRequestId}";
const PULL_REQUEST_PROPERTIES: &str =
    "{project}/_apis/git/repositories/{repositoryId}/pullRequests/{pullRequestId}/properties";
const REVIEWERS: &str =
    "{project}/_apis/git/repositories/{repositoryId}/pullRequests/{pullRequestId}/reviewers/{reviewerId}";
const THREADS: &str =
    "{project}/_apis/git/repositories/{repositoryId}/pullRequests/{pullRequestId}/threads/{threadId}";
const COMMENTS: &str =
    "{project}/_apis/git/repositories/{repositoryId}/pullRequests/{pullRequestId}/threads/{threadId}/comments/{commentId}";
const CONFLICTS: &str =
    "{project}/_apis/git/repositories/{repositoryId}/pullRequests/{pullRequestId}/conflicts/{conflictId}";
const ATTACHMENTS: &str =
    "{project}/_apis/git/repositories/{repositoryId}/pullRequests/{pullRequestId}/attachments/{fileName}";
const MERGES: &str =
    "{project}/_apis/git/repositories/{repositoryNameOrId}/merges/{mergeOperationId}";
const CHERRY_PICKS: &str =
    "{project}/_apis/git/repositories/{repositoryId}/cherryPicks/{cherryPickId}";
const REVERTS: &str = "{project}/_apis/git/repositories/{repositoryId}/reverts/{revertId}";

const V1: &str = "7.1-preview.1";
const V2: &str = "7.1-preview.2";

/// Client for the Git service area.
///
/// Repository arguments accept either the repository id or its name; names
/// require the project to be given.
#[derive(Debug, Clone)]
pub struct GitClient {
    base: RestClientBase,
}

impl ServiceClient for GitClient {
    const RESOURCE_AREA_ID: Option<&'static str> = Some("4e080c62-fa21-4fbc-8fef-2a10a2b38049");

    fn from_base(base: RestClientBase) -> Self {
        Self { base }
    }

    fn base(&self) -> &RestClientBase {
        &self.base
    }
}

impl GitClient {
    // Repositories

    pub async fn get_repositories(
        &self,
        project: Option<&str>,
        options: &GetRepositoriesOptions,
    ) -> Result<Vec<GitRepository>, ApiError> {
        let request = RestRequest::get(REPOSITORIES, V1)
            .route_opt("project", project)
            .query(options)?;
        self.base.send_list(request).await
    }

    pub async fn get_repository(
        &self,
        repository_id: &str,
        project: Option<&str>,
    ) -> Result<GitRepository, ApiError> {
        let request = RestRequest::get(REPOSITORIES, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id);
        self.base.send_json(request).await
    }

    /// Creates a repository, or a fork when `parent_repository` is set.
    pub async fn create_repository(
        &self,
        options: &GitRepositoryCreateOptions,
        project: Option<&str>,
        query: &CreateRepositoryOptions,
    ) -> Result<GitRepository, ApiError> {
        let request = RestRequest::post(REPOSITORIES, V1)
            .route_opt("project", project)
            .query(query)?
            .json(options)?;
        self.base.send_json(request).await
    }

    /// Renames a repository or changes its default branch.
    pub async fn update_repository(
        &self,
        repository: &GitRepository,
        repository_id: &str,
        project: Option<&str>,
    ) -> Result<GitRepository, ApiError> {
        let request = RestRequest::patch(REPOSITORIES, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .json(repository)?;
        self.base.send_json(request).await
    }

    pub async fn delete_repository(
        &self,
        repository_id: &str,
        project: Option<&str>,
    ) -> Result<(), ApiError> {
        let request = RestRequest::delete(REPOSITORIES, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id);
        self.base.send_empty(request).await
    }

    // Items

    fn item_request(
        repository_id: &str,
        path: &str,
        project: Option<&str>,
        options: &GetItemOptions,
    ) -> Result<RestRequest, ApiError> {
        RestRequest::get(ITEMS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("path", path)
            .query(options)
    }

    /// Gets the metadata (and optionally the content) of one item.
    ///
    /// The item path is carried in the route: `/src/file.ts` becomes
    /// `.../Items/src/file.ts`.
    pub async fn get_item(
        &self,
        repository_id: &str,
        path: &str,
        project: Option<&str>,
        options: &GetItemOptions,
    ) -> Result<GitItem, ApiError> {
        let request = Self::item_request(repository_id, path, project, options)?;
        self.base.send_json(request).await
    }

    /// Downloads an item's bytes.
    pub async fn get_item_content(
        &self,
        repository_id: &str,
        path: &str,
        project: Option<&str>,
        options: &GetItemOptions,
    ) -> Result<Vec<u8>, ApiError> {
        let request = Self::item_request(repository_id, path, project, options)?
            .accept(OCTET_STREAM_MEDIA_TYPE);
        self.base.send_bytes(request).await
    }

    pub async fn get_item_text(
        &self,
        repository_id: &str,
        path: &str,
        project: Option<&str>,
        options: &GetItemOptions,
    ) -> Result<String, ApiError> {
        let request =
            Self::item_request(repository_id, path, project, options)?.accept(TEXT_MEDIA_TYPE);
        self.base.send_text(request).await
    }

    /// Downloads a folder as a zip archive.
    pub async fn get_item_zip(
        &self,
        repository_id: &str,
        path: &str,
        project: Option<&str>,
        options: &GetItemOptions,
    ) -> Result<Vec<u8>, ApiError> {
        let request =
            Self::item_request(repository_id, path, project, options)?.accept(ZIP_MEDIA_TYPE);
        self.base.send_bytes(request).await
    }

    pub async fn get_items(
        &self,
        repository_id: &str,
        project: Option<&str>,
        options: &GetItemsOptions,
    ) -> Result<Vec<GitItem>, ApiError> {
        let request = RestRequest::get(ITEMS_LIST, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .query(options)?;
        self.base.send_list(request).await
    }

    // Refs

    /// Lists refs, one page at a time.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use azure_devops_rest::api::git::{GetRefsOptions, GitClient};
    ///
    /// # async fn run(git: GitClient) -> Result<(), azure_devops_rest::api::ApiError> {
    /// let mut options = GetRefsOptions {
    ///     filter: Some("heads/".into()),
    ///     ..Default::default()
    /// };
    /// loop {
    ///     let page = git.get_refs("my-repo", Some("Fabrikam"), &options).await?;
    ///     for git_ref in &page {
    ///         println!("{}", git_ref.name.as_deref().unwrap_or_default());
    ///     }
    ///     match page.continuation_token {
    ///         Some(token) => options.continuation_token = Some(token),
    ///         None => break,
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_refs(
        &self,
        repository_id: &str,
        project: Option<&str>,
        options: &GetRefsOptions,
    ) -> Result<PagedList<GitRef>, ApiError> {
        let request = RestRequest::get(REFS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .query(options)?;
        self.base.send_paged(request).await
    }

    /// Creates, updates or deletes refs in one call.
    pub async fn update_refs(
        &self,
        ref_updates: &[GitRefUpdate],
        repository_id: &str,
        project: Option<&str>,
        project_id: Option<&str>,
    ) -> Result<Vec<GitRefUpdateResult>, ApiError> {
        let request = RestRequest::post(REFS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .query_param_opt("projectId", project_id)
            .json(ref_updates)?;
        self.base.send_list(request).await
    }

    /// Locks or unlocks the ref named by `filter` (without `refs/`).
    pub async fn update_ref(
        &self,
        new_ref_info: &GitRefUpdate,
        repository_id: &str,
        filter: &str,
        project: Option<&str>,
        project_id: Option<&str>,
    ) -> Result<GitRef, ApiError> {
        let request = RestRequest::patch(REFS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .query_param("filter", filter)
            .query_param_opt("projectId", project_id)
            .json(new_ref_info)?;
        self.base.send_json(request).await
    }

    /// Ahead/behind statistics of one branch.
    pub async fn get_branch(
        &self,
        repository_id: &str,
        name: &str,
        project: Option<&str>,
        options: &GetBranchOptions,
    ) -> Result<GitBranchStats, ApiError> {
        let request = RestRequest::get(BRANCH_STATS, V2)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .query_param("name", name)
            .query(options)?;
        self.base.send_json(request).await
    }

    // Commits

    pub async fn get_commit(
        &self,
        commit_id: &str,
        repository_id: &str,
        project: Option<&str>,
        options: &GetCommitOptions,
    ) -> Result<GitCommit, ApiError> {
        let request = RestRequest::get(COMMITS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("commitId", commit_id)
            .query(options)?;
        self.base.send_json(request).await
    }

    pub async fn get_commits(
        &self,
        repository_id: &str,
        project: Option<&str>,
        options: &GetCommitsOptions,
    ) -> Result<Vec<GitCommitRef>, ApiError> {
        let request = RestRequest::get(COMMITS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .query(options)?;
        self.base.send_list(request).await
    }

    pub async fn get_changes(
        &self,
        commit_id: &str,
        repository_id: &str,
        project: Option<&str>,
        options: &GetChangesOptions,
    ) -> Result<GitCommitChanges, ApiError> {
        let request = RestRequest::get(COMMIT_CHANGES, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("commitId", commit_id)
            .query(options)?;
        self.base.send_json(request).await
    }

    // Pushes

    pub async fn get_pushes(
        &self,
        repository_id: &str,
        project: Option<&str>,
        options: &GetPushesOptions,
    ) -> Result<Vec<GitPush>, ApiError> {
        let request = RestRequest::get(PUSHES, V2)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .query(options)?;
        self.base.send_list(request).await
    }

    pub async fn get_push(
        &self,
        repository_id: &str,
        push_id: i32,
        project: Option<&str>,
        options: &GetPushOptions,
    ) -> Result<GitPush, ApiError> {
        let request = RestRequest::get(PUSHES, V2)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pushId", push_id)
            .query(options)?;
        self.base.send_json(request).await
    }

    /// Pushes commits built from the given changes.
    pub async fn create_push(
        &self,
        push: &GitPush,
        repository_id: &str,
        project: Option<&str>,
    ) -> Result<GitPush, ApiError> {
        let request = RestRequest::post(PUSHES, V2)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .json(push)?;
        self.base.send_json(request).await
    }

    // Blobs

    pub async fn get_blob(
        &self,
        repository_id: &str,
        sha1: &str,
        project: Option<&str>,
        options: &GetBlobOptions,
    ) -> Result<GitBlobRef, ApiError> {
        let request = RestRequest::get(BLOBS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("sha1", sha1)
            .query(options)?;
        self.base.send_json(request).await
    }

    pub async fn get_blob_content(
        &self,
        repository_id: &str,
        sha1: &str,
        project: Option<&str>,
        options: &GetBlobOptions,
    ) -> Result<Vec<u8>, ApiError> {
        let request = RestRequest::get(BLOBS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("sha1", sha1)
            .query(options)?
            .accept(OCTET_STREAM_MEDIA_TYPE);
        self.base.send_bytes(request).await
    }

    // Annotated tags

    pub async fn create_annotated_tag(
        &self,
        tag: &GitAnnotatedTag,
        project: &str,
        repository_id: &str,
    ) -> Result<GitAnnotatedTag, ApiError> {
        let request = RestRequest::post(ANNOTATED_TAGS, V1)
            .route("project", project)
            .route("repositoryId", repository_id)
            .json(tag)?;
        self.base.send_json(request).await
    }

    pub async fn get_annotated_tag(
        &self,
        project: &str,
        repository_id: &str,
        object_id: &str,
    ) -> Result<GitAnnotatedTag, ApiError> {
        let request = RestRequest::get(ANNOTATED_TAGS, V1)
            .route("project", project)
            .route("repositoryId", repository_id)
            .route("objectId", object_id);
        self.base.send_json(request).await
    }

    // Commit statuses

    pub async fn create_commit_status(
        &self,
        status: &GitStatus,
        commit_id: &str,
        repository_id: &str,
        project: Option<&str>,
    ) -> Result<GitStatus, ApiError> {
        let request = RestRequest::post(COMMIT_STATUSES, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("commitId", commit_id)
            .json(status)?;
        self.base.send_json(request).await
    }

    pub async fn get_statuses(
        &self,
        commit_id: &str,
        repository_id: &str,
        project: Option<&str>,
        options: &GetStatusesOptions,
    ) -> Result<Vec<GitStatus>, ApiError> {
        let request = RestRequest::get(COMMIT_STATUSES, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("commitId", commit_id)
            .query(options)?;
        self.base.send_list(request).await
    }

    // Pull requests

    /// Opens a pull request.
    ///
    /// `supports_iterations` is sent as a query flag; the body is sent as is.
    pub async fn create_pull_request(
        &self,
        pull_request: &GitPullRequest,
        repository_id: &str,
        project: Option<&str>,
        supports_iterations: Option<bool>,
    ) -> Result<GitPullRequest, ApiError> {
        let request = RestRequest::post(PULL_REQUESTS, V2)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .query_param_opt("supportsIterations", supports_iterations)
            .json(pull_request)?;
        self.base.send_json(request).await
    }

    pub async fn get_pull_request(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
        options: &GetPullRequestOptions,
    ) -> Result<GitPullRequest, ApiError> {
        let request = RestRequest::get(PULL_REQUESTS, V2)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .query(options)?;
        self.base.send_json(request).await
    }

    pub async fn get_pull_requests(
        &self,
        repository_id: &str,
        project: Option<&str>,
        options: &GetPullRequestsOptions,
    ) -> Result<Vec<GitPullRequest>, ApiError> {
        let request = RestRequest::get(PULL_REQUESTS, V2)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .query(options)?;
        self.base.send_list(request).await
    }

    /// Updates title, description, status, auto-complete or completion
    /// options. Only fields that are set are sent.
    pub async fn update_pull_request(
        &self,
        pull_request: &GitPullRequest,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
    ) -> Result<GitPullRequest, ApiError> {
        let request = RestRequest::patch(PULL_REQUESTS, V2)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .json(pull_request)?;
        self.base.send_json(request).await
    }

    pub async fn get_pull_request_by_id(
        &self,
        pull_request_id: i32,
        project: Option<&str>,
    ) -> Result<GitPullRequest, ApiError> {
        let request = RestRequest::get(PROJECT_PULL_REQUESTS, V2)
            .route_opt("project", project)
            .route("pullRequestId", pull_request_id);
        self.base.send_json(request).await
    }

    pub async fn get_pull_requests_by_project(
        &self,
        project: &str,
        options: &GetPullRequestsOptions,
    ) -> Result<Vec<GitPullRequest>, ApiError> {
        let request = RestRequest::get(PROJECT_PULL_REQUESTS, V2)
            .route("project", project)
            .query(options)?;
        self.base.send_list(request).await
    }

    pub async fn get_pull_request_properties(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
    ) -> Result<PropertiesCollection, ApiError> {
        let request = RestRequest::get(PULL_REQUEST_PROPERTIES, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id);
        self.base.send_json(request).await
    }

    /// Applies a JSON Patch document to the pull request's properties.
    pub async fn update_pull_request_properties(
        &self,
        patch_document: &JsonPatchDocument,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
    ) -> Result<PropertiesCollection, ApiError> {
        let request = RestRequest::patch(PULL_REQUEST_PROPERTIES, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .json_patch(patch_document)?;
        self.base.send_json(request).await
    }

    // Reviewers

    /// Adds a reviewer or casts their vote.
    pub async fn create_pull_request_reviewer(
        &self,
        reviewer: &IdentityRefWithVote,
        repository_id: &str,
        pull_request_id: i32,
        reviewer_id: &str,
        project: Option<&str>,
    ) -> Result<IdentityRefWithVote, ApiError> {
        let request = RestRequest::put(REVIEWERS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .route("reviewerId", reviewer_id)
            .json(reviewer)?;
        self.base.send_json(request).await
    }

    pub async fn get_pull_request_reviewers(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
    ) -> Result<Vec<IdentityRefWithVote>, ApiError> {
        let request = RestRequest::get(REVIEWERS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id);
        self.base.send_list(request).await
    }

    pub async fn delete_pull_request_reviewer(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        reviewer_id: &str,
        project: Option<&str>,
    ) -> Result<(), ApiError> {
        let request = RestRequest::delete(REVIEWERS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .route("reviewerId", reviewer_id);
        self.base.send_empty(request).await
    }

    // Threads and comments

    pub async fn get_threads(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
        options: &GetThreadsOptions,
    ) -> Result<Vec<GitPullRequestCommentThread>, ApiError> {
        let request = RestRequest::get(THREADS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .query(options)?;
        self.base.send_list(request).await
    }

    pub async fn get_pull_request_thread(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        thread_id: i32,
        project: Option<&str>,
        options: &GetThreadsOptions,
    ) -> Result<GitPullRequestCommentThread, ApiError> {
        let request = RestRequest::get(THREADS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .route("threadId", thread_id)
            .query(options)?;
        self.base.send_json(request).await
    }

    pub async fn create_thread(
        &self,
        thread: &GitPullRequestCommentThread,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
    ) -> Result<GitPullRequestCommentThread, ApiError> {
        let request = RestRequest::post(THREADS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .json(thread)?;
        self.base.send_json(request).await
    }

    pub async fn update_thread(
        &self,
        thread: &GitPullRequestCommentThread,
        repository_id: &str,
        pull_request_id: i32,
        thread_id: i32,
        project: Option<&str>,
    ) -> Result<GitPullRequestCommentThread, ApiError> {
        let request = RestRequest::patch(THREADS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .route("threadId", thread_id)
            .json(thread)?;
        self.base.send_json(request).await
    }

    fn comment_request(
        request: RestRequest,
        repository_id: &str,
        pull_request_id: i32,
        thread_id: i32,
        project: Option<&str>,
    ) -> RestRequest {
        request
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .route("threadId", thread_id)
    }

    pub async fn get_comments(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        thread_id: i32,
        project: Option<&str>,
    ) -> Result<Vec<Comment>, ApiError> {
        let request = Self::comment_request(
            RestRequest::get(COMMENTS, V1),
            repository_id,
            pull_request_id,
            thread_id,
            project,
        );
        self.base.send_list(request).await
    }

    pub async fn create_comment(
        &self,
        comment: &Comment,
        repository_id: &str,
        pull_request_id: i32,
        thread_id: i32,
        project: Option<&str>,
    ) -> Result<Comment, ApiError> {
        let request = Self::comment_request(
            RestRequest::post(COMMENTS, V1),
            repository_id,
            pull_request_id,
            thread_id,
            project,
        )
        .json(comment)?;
        self.base.send_json(request).await
    }

    pub async fn update_comment(
        &self,
        comment: &Comment,
        repository_id: &str,
        pull_request_id: i32,
        thread_id: i32,
        comment_id: i32,
        project: Option<&str>,
    ) -> Result<Comment, ApiError> {
        let request = Self::comment_request(
            RestRequest::patch(COMMENTS, V1),
            repository_id,
            pull_request_id,
            thread_id,
            project,
        )
        .route("commentId", comment_id)
        .json(comment)?;
        self.base.send_json(request).await
    }

    pub async fn delete_comment(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        thread_id: i32,
        comment_id: i32,
        project: Option<&str>,
    ) -> Result<(), ApiError> {
        let request = Self::comment_request(
            RestRequest::delete(COMMENTS, V1),
            repository_id,
            pull_request_id,
            thread_id,
            project,
        )
        .route("commentId", comment_id);
        self.base.send_empty(request).await
    }

    // Conflicts

    pub async fn get_pull_request_conflicts(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
        options: &GetConflictsOptions,
    ) -> Result<Vec<GitConflict>, ApiError> {
        let request = RestRequest::get(CONFLICTS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .query(options)?;
        self.base.send_list(request).await
    }

    pub async fn get_pull_request_conflict(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        conflict_id: i32,
        project: Option<&str>,
    ) -> Result<GitConflict, ApiError> {
        let request = RestRequest::get(CONFLICTS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .route("conflictId", conflict_id);
        self.base.send_json(request).await
    }

    /// Records a resolution for a merge conflict.
    pub async fn update_pull_request_conflict(
        &self,
        conflict: &GitConflict,
        repository_id: &str,
        pull_request_id: i32,
        conflict_id: i32,
        project: Option<&str>,
    ) -> Result<GitConflict, ApiError> {
        let request = RestRequest::patch(CONFLICTS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .route("conflictId", conflict_id)
            .json(conflict)?;
        self.base.send_json(request).await
    }

    // Attachments

    /// Uploads a file attached to a pull request.
    pub async fn create_attachment(
        &self,
        content: impl Into<Vec<u8>>,
        file_name: &str,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
    ) -> Result<Attachment, ApiError> {
        let request = RestRequest::post(ATTACHMENTS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .route("fileName", file_name)
            .raw(content);
        self.base.send_json(request).await
    }

    pub async fn get_attachments(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
    ) -> Result<Vec<Attachment>, ApiError> {
        let request = RestRequest::get(ATTACHMENTS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id);
        self.base.send_list(request).await
    }

    pub async fn get_attachment_content(
        &self,
        file_name: &str,
        repository_id: &str,
        pull_request_id: i32,
        project: Option<&str>,
    ) -> Result<Vec<u8>, ApiError> {
        let request = RestRequest::get(ATTACHMENTS, V1)
            .route_opt("project", project)
            .route("repositoryId", repository_id)
            .route("pullRequestId", pull_request_id)
            .route("fileName", file_name)
            .accept(OCTET_STREAM_MEDIA_TYPE);
        self.base.send_bytes(request).await
    }

    // Merges, cherry-picks and reverts

    /// Requests a server-side merge commit of `merge_parameters.parents`.
    pub async fn create_merge_request(
        &self,
        merge_parameters: &GitMergeParameters,
        project: &str,
        repository_name_or_id: &str,
        include_links: Option<bool>,
    ) -> Result<GitMerge, ApiError> {
        let request = RestRequest::post(MERGES, V1)
            .route("project", project)
            .route("repositoryNameOrId", repository_name_or_id)
            .query_param_opt("includeLinks", include_links)
            .json(merge_parameters)?;
        self.base.send_json(request).await
    }

    pub async fn get_merge_request(
        &self,
        project: &str,
        repository_name_or_id: &str,
        merge_operation_id: i32,
        include_links: Option<bool>,
    ) -> Result<GitMerge, ApiError> {
        let request = RestRequest::get(MERGES, V1)
            .route("project", project)
            .route("repositoryNameOrId", repository_name_or_id)
            .route("mergeOperationId", merge_operation_id)
            .query_param_opt("includeLinks", include_links);
        self.base.send_json(request).await
    }

    pub async fn create_cherry_pick(
        &self,
        parameters: &GitAsyncRefOperationParameters,
        project: &str,
        repository_id: &str,
    ) -> Result<GitCherryPick, ApiError> {
        let request = RestRequest::post(CHERRY_PICKS, V1)
            .route("project", project)
            .route("repositoryId", repository_id)
            .json(parameters)?;
        self.base.send_json(request).await
    }

    pub async fn get_cherry_pick(
        &self,
        project: &str,
        cherry_pick_id: i32,
        repository_id: &str,
    ) -> Result<GitCherryPick, ApiError> {
        let request = RestRequest::get(CHERRY_PICKS, V1)
            .route("project", project)
            .route("repositoryId", repository_id)
            .route("cherryPickId", cherry_pick_id);
        self.base.send_json(request).await
    }

    /// Finds the cherry-pick that generated `ref_name`.
    pub async fn get_cherry_pick_for_ref_name(
        &self,
        project: &str,
        repository_id: &str,
        ref_name: &str,
    ) -> Result<GitCherryPick, ApiError> {
        let request = RestRequest::get(CHERRY_PICKS, V1)
            .route("project", project)
            .route("repositoryId", repository_id)
            .query_param("refName", ref_name);
        self.base.send_json(request).await
    }

    pub async fn create_revert(
        &self,
        parameters: &GitAsyncRefOperationParameters,
        project: &str,
        repository_id: &str,
    ) -> Result<GitRevert, ApiError> {
        let request = RestRequest::post(REVERTS, V1)
            .route("project", project)
            .route("repositoryId", repository_id)
            .json(parameters)?;
        self.base.send_json(request).await
    }

    pub async fn get_revert(
        &self,
        project: &str,
        revert_id: i32,
        repository_id: &str,
    ) -> Result<GitRevert, ApiError> {
        let request = RestRequest::get(REVERTS, V1)
            .route("project", project)
            .route("repositoryId", repository_id)
            .route("revertId", revert_id);
        self.base.send_json(request).await
    }

    pub async fn get_revert_for_ref_name(
        &self,
        project: &str,
        repository_id: &str,
        ref_name: &str,
    ) -> Result<GitRevert, ApiError> {
        let request = RestRequest::get(REVERTS, V1)
            .route("project", project)
            .route("repositoryId", repository_id)
            .query_param("refName", ref_name);
        self.base.send_json(request).await
    }

    /// Shorthand that adds `reviewer_id` with no vote.
    pub async fn add_reviewer(
        &self,
        repository_id: &str,
        pull_request_id: i32,
        reviewer_id: &str,
        project: Option<&str>,
    ) -> Result<IdentityRefWithVote, ApiError> {
        let reviewer = IdentityRefWithVote {
            identity: IdentityRef::with_id(reviewer_id),
            vote: Some(0),
            ..Default::default()
        };
        self.create_pull_request_reviewer(&reviewer, repository_id, pull_request_id, reviewer_id, project)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::api::common::{JsonPatchOperation, CONTINUATION_TOKEN_HEADER};
    use crate::api::testing::MockTransport;
    use crate::api::Connection;

    fn git(transport: &Arc<MockTransport>) -> GitClient {
        Connection::new("https://dev.azure.com/contoso", transport.clone())
            .unwrap()
            .client()
    }

    #[test]
    fn test_get_item_keeps_path_verbatim() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"path": "/a//b/c d.ts"}));

        tokio_test::block_on(git(&transport).get_item(
            "abc",
            "/a//b/c d.ts",
            None,
            &GetItemOptions::default(),
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert!(request.url.path().ends_with("/abc/Items/a//b/c%20d.ts"));
    }

    #[test]
    fn test_get_item_puts_path_in_route() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"objectId": "61a86fdaa", "path": "/src/file.ts"}));

        let item = tokio_test::block_on(git(&transport).get_item(
            "abc",
            "/src/file.ts",
            None,
            &GetItemOptions::default(),
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert!(request.url.path().ends_with("/abc/Items/src/file.ts"));
        assert_eq!(
            request.header("accept"),
            Some("application/json;api-version=7.1-preview.1")
        );
        assert!(request.body.is_none());
        assert_eq!(item.path.as_deref(), Some("/src/file.ts"));
    }

    #[test]
    fn test_get_item_text_asks_for_plain_text() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(200, &[("content-type", "text/plain")], b"hello".to_vec());

        let text = tokio_test::block_on(git(&transport).get_item_text(
            "abc",
            "README.md",
            Some("Fabrikam"),
            &GetItemOptions {
                include_content: Some(true),
                ..Default::default()
            },
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(text, "hello");
        assert_eq!(
            request.url.path(),
            "/contoso/Fabrikam/_apis/git/repositories/abc/Items/README.md"
        );
        assert_eq!(request.url.query(), Some("includeContent=true"));
        assert_eq!(request.header("accept"), Some("text/plain;api-version=7.1-preview.1"));
    }

    #[test]
    fn test_create_pull_request_sends_supports_iterations_as_query() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(201, json!({"pullRequestId": 22, "status": "active"}));

        let pull_request = GitPullRequest {
            source_ref_name: Some("refs/heads/feature".into()),
            target_ref_name: Some("refs/heads/main".into()),
            title: Some("Add feature".into()),
            ..Default::default()
        };

        let created = tokio_test::block_on(git(&transport).create_pull_request(
            &pull_request,
            "repo",
            Some("Fabrikam"),
            Some(true),
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.path(),
            "/contoso/Fabrikam/_apis/git/repositories/repo/pullrequests"
        );
        assert_eq!(request.url.query(), Some("supportsIterations=true"));
        assert_eq!(
            request.json_body(),
            Some(json!({
                "title": "Add feature",
                "sourceRefName": "refs/heads/feature",
                "targetRefName": "refs/heads/main"
            }))
        );
        assert_eq!(created.pull_request_id, Some(22));
        assert_eq!(created.status, Some(PullRequestStatus::Active));
    }

    #[test]
    fn test_get_refs_pages_with_filter_in_query() {
        let transport = Arc::new(MockTransport::new());
        transport.push_with_headers(
            200,
            &[(CONTINUATION_TOKEN_HEADER, "page-2")],
            br#"{"count":1,"value":[{"name":"refs/heads/main","objectId":"abc"}]}"#.to_vec(),
        );
        transport.push_json(200, json!({"count": 0, "value": []}));
        let client = git(&transport);

        let mut options = GetRefsOptions {
            filter: Some("heads/".into()),
            ..Default::default()
        };
        let first = tokio_test::block_on(client.get_refs("repo", None, &options)).unwrap();
        options.continuation_token = first.continuation_token.clone();
        let second = tokio_test::block_on(client.get_refs("repo", None, &options)).unwrap();

        let requests = transport.requests();
        assert_eq!(first.continuation_token.as_deref(), Some("page-2"));
        assert_eq!(first[0].name.as_deref(), Some("refs/heads/main"));
        assert!(second.continuation_token.is_none());
        assert_eq!(requests[0].url.path(), "/contoso/_apis/git/repositories/repo/refs");
        let first_query: Vec<(String, String)> = requests[0].url.query_pairs().into_owned().collect();
        assert_eq!(first_query, vec![("filter".to_string(), "heads/".to_string())]);
        let second_query: Vec<(String, String)> = requests[1].url.query_pairs().into_owned().collect();
        assert!(second_query.contains(&("filter".to_string(), "heads/".to_string())));
        assert!(second_query.contains(&("continuationToken".to_string(), "page-2".to_string())));
    }

    #[test]
    fn test_get_pull_requests_flattens_search_criteria() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"count": 1, "value": [{"pullRequestId": 1}]}));

        let options = GetPullRequestsOptions {
            search_criteria: Some(GitPullRequestSearchCriteria {
                status: Some(PullRequestStatus::Completed),
                ..Default::default()
            }),
            ..Default::default()
        };
        let prs = tokio_test::block_on(git(&transport).get_pull_requests("repo", Some("P"), &options))
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(prs.len(), 1);
        assert_eq!(request.url.query(), Some("searchCriteria.status=completed"));
        assert_eq!(
            request.header("accept"),
            Some("application/json;api-version=7.1-preview.2")
        );
    }

    #[test]
    fn test_update_properties_uses_json_patch() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"count": 1, "value": {"reviewed": {"$type": "System.Boolean", "$value": true}}}));

        let patch = vec![JsonPatchOperation::add("/reviewed", true)];
        tokio_test::block_on(git(&transport).update_pull_request_properties(&patch, "repo", 7, None))
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(
            request.url.path(),
            "/contoso/_apis/git/repositories/repo/pullRequests/7/properties"
        );
        assert_eq!(request.header("content-type"), Some("application/json-patch+json"));
        assert_eq!(
            request.json_body(),
            Some(json!([{"op": "add", "path": "/reviewed", "value": true}]))
        );
    }

    #[test]
    fn test_create_attachment_sends_raw_bytes() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(201, json!({"id": 3, "displayName": "log.txt"}));

        let attachment = tokio_test::block_on(git(&transport).create_attachment(
            b"line one".to_vec(),
            "log.txt",
            "repo",
            9,
            Some("P"),
        ))
        .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(attachment.id, Some(3));
        assert!(request.url.path().ends_with("/pullRequests/9/attachments/log.txt"));
        assert_eq!(request.header("content-type"), Some("application/octet-stream"));
        assert_eq!(request.body.as_deref(), Some(&b"line one"[..]));
    }

    #[test]
    fn test_delete_repository_reports_not_found() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            404,
            json!({
                "$id": "1",
                "message": "TF200016: The following project does not exist: X.",
                "typeKey": "ProjectDoesNotExistWithNameException"
            }),
        );

        let err = tokio_test::block_on(git(&transport).delete_repository("repo", Some("X")))
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("TF200016"));
    }

    #[test]
    fn test_comment_route_with_and_without_comment_id() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({"value": [{"id": 1, "content": "hi"}]}));
        transport.push_json(200, json!({}));
        let client = git(&transport);

        let comments = tokio_test::block_on(client.get_comments("repo", 1, 2, None)).unwrap();
        tokio_test::block_on(client.delete_comment("repo", 1, 2, 3, None)).unwrap();

        let requests = transport.requests();
        assert_eq!(comments.len(), 1);
        assert!(requests[0].url.path().ends_with("/pullRequests/1/threads/2/comments"));
        assert!(requests[1].url.path().ends_with("/pullRequests/1/threads/2/comments/3"));
        assert_eq!(requests[1].method, Method::DELETE);
    }
}
