crate::define_id_enum! {
    /// Framework (or, for the JVM, build tool) recognised inside a manifest
    FrameworkId {
        Gin => "gin" : "Gin",
        Fiber => "fiber" : "Fiber",
        Echo => "echo" : "Echo",
        Gorilla => "gorilla" : "Gorilla",
        Express => "express" : "Express",
        NextJs => "nextjs" : "Next.js",
        React => "react" : "React",
        Vue => "vue" : "Vue",
        NestJs => "nestjs" : "NestJS",
        Flask => "flask" : "Flask",
        Django => "django" : "Django",
        FastApi => "fastapi" : "FastAPI",
        Maven => "maven" : "Maven",
        Gradle => "gradle" : "Gradle",
        Rails => "rails" : "Rails",
        Sinatra => "sinatra" : "Sinatra",
        Laravel => "laravel" : "Laravel",
        Symfony => "symfony" : "Symfony",
        AspNet => "aspnet" : "ASP.NET Core",
        Actix => "actix" : "Actix Web" | "actix-web",
        Axum => "axum" : "Axum",
        Rocket => "rocket" : "Rocket",
    }
}
