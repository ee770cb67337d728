/// Origin of the hosted Tracker API.
pub const TRACKER_BASE_URL: &str = "https://www.pivotaltracker.com";

/// Path prefix shared by every v5 endpoint.
pub const API_PATH: [&str; 2] = ["services", "v5"];

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const TRACKER_TOKEN_HEADER: &str = "X-TrackerToken";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// `getStory` only ever asks for the first match.
pub const STORY_LOOKUP_LIMIT: u32 = 1;
