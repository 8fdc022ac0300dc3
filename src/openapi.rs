use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    Artist, ArtistAppearance, ArtistDetail, ArtistDetailResponse, ArtistResponse, ArtistSummary,
    ArtistsResponse, CategoriesResponse, CategoryQuestionsResponse, CreateArtistRequest,
    CreateDrinkRequest, CreateQuestionRequest, CreateShowRequest, CreateVenueRequest,
    DeletedResponse, DirectorySearchRequest, DirectorySearchResponse, Drink, DrinkDeletedResponse,
    DrinkShort, DrinksLongResponse, DrinksShortResponse, ErrorResponse, HealthResponse,
    Ingredient, PageInfo, Question, QuestionCreatedResponse, QuestionDeletedResponse,
    QuestionsPageResponse, QuizCategory, QuizRequest, QuizResponse, RecipeInput, SearchHit,
    SearchQuestionsRequest, SearchQuestionsResponse, Show, ShowListing, ShowResponse,
    ShowsResponse, ShortIngredient, UpdateArtistRequest, UpdateDrinkRequest, UpdateVenueRequest,
    Venue, VenueArea, VenueAreasResponse, VenueBooking, VenueDetail, VenueDetailResponse,
    VenueResponse, VenueSummary,
};

/// OpenAPI documentation for the coursework API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coursework API",
        version = "0.1.0",
        description = "Trivia, coffee shop and venue booking REST backends. Every list endpoint returns pages of ten items.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Trivia", description = "Trivia categories, questions and quizzes"),
        (name = "Coffee", description = "Coffee shop menu (mutations need a bearer token with the matching permission)"),
        (name = "Venues", description = "Booking directory venues"),
        (name = "Artists", description = "Booking directory artists"),
        (name = "Shows", description = "Booking directory shows")
    ),
    paths(
        crate::routes::health_check,
        crate::handlers::get_categories,
        crate::handlers::get_questions,
        crate::handlers::delete_question,
        crate::handlers::create_question,
        crate::handlers::search_questions,
        crate::handlers::get_category_questions,
        crate::handlers::play_quiz,
        crate::handlers::get_drinks,
        crate::handlers::get_drinks_detail,
        crate::handlers::create_drink,
        crate::handlers::update_drink,
        crate::handlers::delete_drink,
        crate::handlers::get_venues,
        crate::handlers::get_venue,
        crate::handlers::search_venues,
        crate::handlers::create_venue,
        crate::handlers::update_venue,
        crate::handlers::delete_venue,
        crate::handlers::get_artists,
        crate::handlers::get_artist,
        crate::handlers::search_artists,
        crate::handlers::create_artist,
        crate::handlers::update_artist,
        crate::handlers::get_shows,
        crate::handlers::create_show
    ),
    components(
        schemas(
            PageInfo,
            Question,
            CreateQuestionRequest,
            SearchQuestionsRequest,
            QuizCategory,
            QuizRequest,
            CategoriesResponse,
            QuestionsPageResponse,
            CategoryQuestionsResponse,
            SearchQuestionsResponse,
            QuestionCreatedResponse,
            QuestionDeletedResponse,
            QuizResponse,
            Ingredient,
            ShortIngredient,
            Drink,
            DrinkShort,
            RecipeInput,
            CreateDrinkRequest,
            UpdateDrinkRequest,
            DrinksShortResponse,
            DrinksLongResponse,
            DrinkDeletedResponse,
            Venue,
            Artist,
            Show,
            CreateVenueRequest,
            UpdateVenueRequest,
            CreateArtistRequest,
            UpdateArtistRequest,
            CreateShowRequest,
            DirectorySearchRequest,
            VenueSummary,
            VenueArea,
            VenueAreasResponse,
            ArtistAppearance,
            VenueBooking,
            VenueDetail,
            VenueDetailResponse,
            ArtistDetail,
            ArtistDetailResponse,
            SearchHit,
            DirectorySearchResponse,
            ArtistSummary,
            ArtistsResponse,
            ShowListing,
            ShowsResponse,
            VenueResponse,
            ArtistResponse,
            ShowResponse,
            DeletedResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "HS256 token from the identity provider; the permissions claim lists granted actions such as post:drinks",
                        ))
                        .build(),
                ),
            );
        }
    }
}
