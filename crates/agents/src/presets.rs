//! Built-in agents of the Ad Agency AI assistant.
//!
//! Each preset is a plain constructor. The host calls them during its own
//! startup and owns the returned descriptors; nothing here is global.

use acore::{AgentDescriptor, ToolBinding, ValidationError, create_agent};
use schemars::{Schema, json_schema};

/// Model used by every built-in agent and by declaration files that omit one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// The main assistant agent.
pub fn ad_agency_agent() -> Result<AgentDescriptor, ValidationError> {
    create_agent(
        "ad_agency_agent",
        DEFAULT_MODEL,
        "Main agent for the Ad Agency AI Assistant.",
        "You are a helpful AI assistant that specializes in generating ad campaigns and copy.",
        Vec::new(),
    )
}

/// Generates campaign ideas from product details and a target audience.
pub fn campaign_brainstormer() -> Result<AgentDescriptor, ValidationError> {
    create_agent(
        "campaign_brainstormer",
        DEFAULT_MODEL,
        "Generate innovative campaign ideas from product details and target audience.",
        "You are a marketing expert. Generate creative campaign ideas based on the \
         product details and target audience information provided. Generate at least \
         3 campaign ideas.",
        Vec::new(),
    )
}

/// Writes titles, taglines, and ad copy variations.
pub fn copy_generator() -> Result<AgentDescriptor, ValidationError> {
    create_agent(
        "copy_generator",
        DEFAULT_MODEL,
        "Generate compelling ad copy, titles, and taglines that convert.",
        "You are an expert advertising copywriter. Based on the product description, \
         target audience, and campaign goals provided, write several ad titles, several \
         taglines, and several variations of ad copy.",
        Vec::new(),
    )
}

/// Proposes visual concepts for a campaign.
pub fn image_idea_generator() -> Result<AgentDescriptor, ValidationError> {
    create_agent(
        "image_idea_generator",
        DEFAULT_MODEL,
        "Generate visual concepts for ad campaigns.",
        "You are a creative director at an ad agency. Brainstorm 3 distinct and \
         compelling visual concepts for an ad campaign. For each concept, provide a \
         title, a detailed description of the visuals, and a suggested art style.",
        Vec::new(),
    )
}

/// Confirms that nothing was done.
pub fn nothing_agent() -> Result<AgentDescriptor, ValidationError> {
    create_agent(
        "nothing_agent",
        DEFAULT_MODEL,
        "An agent that does nothing, perfectly.",
        "You are a helpful agent who can do nothing. Respond by confirming you did nothing.",
        Vec::new(),
    )
}

/// Arguments a built-in worker expects when called as a tool.
///
/// Returns `None` for agents that are not built-in workers.
pub fn input_schema(agent: &str) -> Option<Schema> {
    let schema = match agent {
        "campaign_brainstormer" => json_schema!({
            "type": "object",
            "properties": {
                "productDetails": {
                    "type": "string",
                    "description": "Details about the product or service."
                },
                "targetAudience": {
                    "type": "string",
                    "description": "Information about the target audience."
                }
            },
            "required": ["productDetails", "targetAudience"]
        }),
        "copy_generator" => json_schema!({
            "type": "object",
            "properties": {
                "productDescription": {
                    "type": "string",
                    "description": "What the product is and what it does."
                },
                "targetAudience": {
                    "type": "string",
                    "description": "Who the copy is written for."
                },
                "campaignGoals": {
                    "type": "string",
                    "description": "What the campaign should achieve."
                }
            },
            "required": ["productDescription", "targetAudience", "campaignGoals"]
        }),
        "image_idea_generator" => json_schema!({
            "type": "object",
            "properties": {
                "campaignConcept": {
                    "type": "string",
                    "description": "A brief description of the ad campaign concept."
                }
            },
            "required": ["campaignConcept"]
        }),
        "nothing_agent" => json_schema!({
            "type": "object",
            "properties": {
                "prompt": { "type": "string", "description": "The user prompt." }
            },
            "required": ["prompt"]
        }),
        _ => return None,
    };
    Some(schema)
}

/// Bind a worker for its lead: a function tool with the worker's input
/// schema when it has one, a plain delegate otherwise.
pub fn delegate_tool(worker: &AgentDescriptor) -> ToolBinding {
    match input_schema(worker.name()) {
        Some(parameters) => ToolBinding::function(worker.name(), worker.description(), parameters),
        None => ToolBinding::from(worker),
    }
}

/// The full agency: every worker, then the main agent with each worker
/// bound as a tool through [`delegate_tool`].
///
/// Workers come first so a registrar that resolves delegate bindings
/// eagerly sees them before the agent that refers to them.
pub fn ad_agency_team() -> Result<Vec<AgentDescriptor>, ValidationError> {
    let workers = vec![
        campaign_brainstormer()?,
        copy_generator()?,
        image_idea_generator()?,
        nothing_agent()?,
    ];

    let main = ad_agency_agent()?
        .to_builder()
        .tools(workers.iter().map(delegate_tool).collect())
        .build()?;

    let mut team = workers;
    team.push(main);
    Ok(team)
}
