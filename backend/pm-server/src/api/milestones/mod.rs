pub mod milestone_list_response;
pub mod milestones;
