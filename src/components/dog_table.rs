use yew::prelude::*;

use crate::models::Dog;

#[derive(Properties, PartialEq)]
pub struct DogTableProps {
    pub dogs: Vec<Dog>,
    pub show_empty_row: bool,
}

#[function_component(DogTable)]
pub fn dog_table(props: &DogTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="dog-table">
                <thead>
                    <tr>
                        <th>{"Image"}</th>
                        <th>{"Name"}</th>
                        <th>{"Breed"}</th>
                        <th>{"Age"}</th>
                        <th>{"Zip Code"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.show_empty_row {
                        <tr>
                            <td colspan="5" class="empty-row">{"❌ No dogs found."}</td>
                        </tr>
                    }
                    { for props.dogs.iter().map(dog_row) }
                </tbody>
            </table>
        </div>
    }
}

fn dog_row(dog: &Dog) -> Html {
    let onerror = {
        let img = dog.img.clone();
        Callback::from(move |_: Event| {
            log::error!("❌ Imagen no cargó: {}", img);
        })
    };

    html! {
        <tr key={dog.id.clone()}>
            <td>
                <img class="dog-image" src={dog.img.clone()} alt={dog.name.clone()} {onerror} />
            </td>
            <td>{dog.name.clone()}</td>
            <td>{dog.breed.clone()}</td>
            <td>{dog.age.to_string()}</td>
            <td>{dog.zip_code.clone()}</td>
        </tr>
    }
}
